//! MongoDB-backed [`LecturerStore`].
//!
//! No client is kept between calls: each operation connects, runs, and shuts
//! the client down before handing back the operation's result, whether it
//! succeeded or not.

use std::future::Future;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use registrar_config::MongoConfig;
use registrar_models::Lecturer;
use tracing::{debug, instrument};

use crate::{LecturerStore, StoreError};

#[derive(Clone, Debug)]
pub struct MongoLecturerStore {
    config: MongoConfig,
}

impl MongoLecturerStore {
    pub fn new(config: MongoConfig) -> Self {
        Self { config }
    }

    /// Runs `op` against the lecturer collection on a client that lives only
    /// for this call.
    async fn with_collection<T, F, Fut>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(Collection<Lecturer>) -> Fut,
        Fut: Future<Output = mongodb::error::Result<T>>,
    {
        let client = Client::with_uri_str(&self.config.uri).await?;
        let collection = client
            .database(&self.config.database)
            .collection::<Lecturer>(&self.config.collection);

        let result = op(collection).await;

        client.shutdown().await;
        debug!("MongoDB client shut down");

        result.map_err(StoreError::from)
    }
}

#[async_trait]
impl LecturerStore for MongoLecturerStore {
    #[instrument(skip(self))]
    async fn get_all_lecturers(&self) -> Result<Vec<Lecturer>, StoreError> {
        self.with_collection(|collection| async move {
            collection
                .find(doc! {})
                .sort(doc! { "_id": 1 })
                .await?
                .try_collect::<Vec<_>>()
                .await
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete_lecturer(&self, lecturer_id: &str) -> Result<bool, StoreError> {
        self.with_collection(|collection| async move {
            let result = collection.delete_one(doc! { "_id": lecturer_id }).await?;
            Ok::<_, mongodb::error::Error>(result.deleted_count > 0)
        })
        .await
    }
}
