use thiserror::Error;

use ledgerview_ingest::IngestError;

/// Record-store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database query failed.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A fixture file could not be read or normalized.
    #[error("fixture load failed: {0}")]
    Fixture(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Fixture(err.to_string())
    }
}

impl From<IngestError> for StoreError {
    fn from(err: IngestError) -> Self {
        StoreError::Fixture(err.to_string())
    }
}
