//! # Registrar Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`database`]: PostgreSQL pool settings
//! - [`mongo`]: MongoDB connection settings for the lecturer collection
//! - [`server`]: Listen address and static asset directory
//!
//! Every value has a default suited to local development, so a bare
//! `cargo run` works against a local PostgreSQL and MongoDB.
//!
//! # Example
//!
//! ```ignore
//! use registrar_config::{DatabaseConfig, MongoConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let mongo = MongoConfig::from_env();
//! let server = ServerConfig::from_env();
//! ```

pub mod database;
pub mod mongo;
pub mod server;

pub use database::DatabaseConfig;
pub use mongo::MongoConfig;
pub use server::ServerConfig;

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
