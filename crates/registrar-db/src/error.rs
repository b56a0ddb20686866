use thiserror::Error;

/// Failure of a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert hit the primary key of an existing student.
    #[error("student with id {0} already exists")]
    DuplicateStudent(String),

    #[error("relational store error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
