//! Store tests against a real MongoDB server.
//!
//! Run with `MONGO_URI` pointing at a disposable server and
//! `cargo test -- --ignored`. Each test works in its own collection and
//! drops it afterwards.

use mongodb::Client;
use mongodb::bson::{Document, doc};
use registrar_config::MongoConfig;
use registrar_db::{LecturerStore, MongoLecturerStore};

struct TestCollection {
    config: MongoConfig,
}

impl TestCollection {
    async fn seed(documents: Vec<Document>) -> Self {
        let config = MongoConfig {
            collection: format!("lecturers_{}", uuid::Uuid::new_v4().simple()),
            ..MongoConfig::from_env()
        };

        let client = Client::with_uri_str(&config.uri).await.unwrap();
        client
            .database(&config.database)
            .collection::<Document>(&config.collection)
            .insert_many(documents)
            .await
            .unwrap();
        client.shutdown().await;

        Self { config }
    }

    fn store(&self) -> MongoLecturerStore {
        MongoLecturerStore::new(self.config.clone())
    }

    async fn cleanup(self) {
        let client = Client::with_uri_str(&self.config.uri).await.unwrap();
        client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection)
            .drop()
            .await
            .unwrap();
        client.shutdown().await;
    }
}

fn lecturers() -> Vec<Document> {
    vec![
        doc! { "_id": "L002", "name": "Gerry Harrison", "did": "CS" },
        doc! { "_id": "L003", "name": "Sue Kelly" },
        doc! { "_id": "L001", "name": "Kim Hoyne", "did": "ENG" },
    ]
}

#[tokio::test]
#[ignore]
async fn test_lecturers_sorted_by_id() {
    let collection = TestCollection::seed(lecturers()).await;

    let listed = collection.store().get_all_lecturers().await.unwrap();

    let ids: Vec<&str> = listed.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["L001", "L002", "L003"]);
    assert_eq!(listed[0].did.as_deref(), Some("ENG"));
    assert_eq!(listed[2].did, None);

    collection.cleanup().await;
}

#[tokio::test]
#[ignore]
async fn test_delete_existing_lecturer() {
    let collection = TestCollection::seed(lecturers()).await;
    let store = collection.store();

    assert!(store.delete_lecturer("L002").await.unwrap());

    let ids: Vec<String> = store
        .get_all_lecturers()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec!["L001", "L003"]);

    collection.cleanup().await;
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_lecturer() {
    let collection = TestCollection::seed(lecturers()).await;
    let store = collection.store();

    assert!(!store.delete_lecturer("L999").await.unwrap());
    assert!(store.delete_lecturer("L003").await.unwrap());
    assert!(!store.delete_lecturer("L003").await.unwrap());
    assert_eq!(store.get_all_lecturers().await.unwrap().len(), 2);

    collection.cleanup().await;
}
