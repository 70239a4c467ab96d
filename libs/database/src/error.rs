use thiserror::Error;

/// Error type for document store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No database connection is configured
    #[error("Database not configured")]
    Unavailable,

    /// The supplied identifier is not valid identifier syntax
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Any underlying driver or I/O fault
    #[error("Database error: {0}")]
    Database(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
