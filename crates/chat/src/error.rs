use thiserror::Error;

/// Chat responder failures.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The external answering endpoint is not configured.
    #[error("chat endpoint not configured: {0}")]
    Configuration(String),

    /// The external call failed or returned a non-success status.
    #[error("upstream chat call failed: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Upstream(err.to_string())
    }
}
