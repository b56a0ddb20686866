//! MongoDB configuration for the lecturer collection.
//!
//! # Environment Variables
//!
//! - `MONGO_URI`: connection string (default: `mongodb://localhost:27017`)
//! - `MONGO_DATABASE`: database name (default: `proj2024MongoDB`)
//! - `MONGO_COLLECTION`: lecturer collection (default: `lecturers`)

use std::env;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "proj2024MongoDB".to_string(),
            collection: "lecturers".to_string(),
        }
    }
}

impl MongoConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: env::var("MONGO_URI").unwrap_or(defaults.uri),
            database: env::var("MONGO_DATABASE").unwrap_or(defaults.database),
            collection: env::var("MONGO_COLLECTION").unwrap_or(defaults.collection),
        }
    }
}
