//! # Registrar DB
//!
//! Data access for the Registrar admin site.
//!
//! Two stores back the site:
//!
//! - [`RecordStore`]: students, grades and modules in PostgreSQL, served from a
//!   bounded connection pool ([`PgRecordStore`]).
//! - [`LecturerStore`]: lecturer documents in MongoDB, one client per call
//!   ([`MongoLecturerStore`]).
//!
//! Both are object safe so the HTTP layer can hold them as `Arc<dyn _>` and
//! tests can swap in in-memory implementations.
//!
//! # Example
//!
//! ```ignore
//! use registrar_config::{DatabaseConfig, MongoConfig};
//! use registrar_db::{MongoLecturerStore, PgRecordStore, RecordStore};
//!
//! let records = PgRecordStore::connect(&DatabaseConfig::from_env()).await?;
//! let lecturers = MongoLecturerStore::new(MongoConfig::from_env());
//!
//! let students = records.get_all_students().await?;
//! records.close().await;
//! ```

use async_trait::async_trait;
use registrar_models::{GradesByStudent, Lecturer, Student};

pub mod error;
pub mod mongo;
pub mod postgres;

pub use error::StoreError;
pub use mongo::MongoLecturerStore;
pub use postgres::PgRecordStore;

/// Students, grades and modules.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All students ordered by sid ascending.
    async fn get_all_students(&self) -> Result<Vec<Student>, StoreError>;

    async fn get_student_by_id(&self, sid: &str) -> Result<Option<Student>, StoreError>;

    /// Overwrites name and age. Updating a sid that does not exist is not an error.
    async fn update_student(&self, sid: &str, name: &str, age: i32) -> Result<(), StoreError>;

    /// Fails with [`StoreError::DuplicateStudent`] when the sid is taken.
    async fn add_student(&self, sid: &str, name: &str, age: i32) -> Result<(), StoreError>;

    async fn get_all_grades(&self) -> Result<GradesByStudent, StoreError>;

    /// True iff at least one module names this lecturer.
    async fn lecturer_has_modules(&self, lecturer_id: &str) -> Result<bool, StoreError>;
}

/// Lecturer documents.
#[async_trait]
pub trait LecturerStore: Send + Sync {
    /// All lecturers ordered by id ascending.
    async fn get_all_lecturers(&self) -> Result<Vec<Lecturer>, StoreError>;

    /// Returns whether a document was removed.
    async fn delete_lecturer(&self, lecturer_id: &str) -> Result<bool, StoreError>;
}
