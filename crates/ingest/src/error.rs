use thiserror::Error;

/// Errors raised while reading the extracted-document feed.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid feed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("feed root must be a JSON array of documents")]
    NotAnArray,
}
