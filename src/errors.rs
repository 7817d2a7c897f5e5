use thiserror::Error;

/// Message returned to clients when `text` is missing or empty.
pub const MISSING_TEXT_MESSAGE: &str = "Input text is required.";

/// Message returned to clients when the model produced no usable result set.
pub const INDEX_ERROR_MESSAGE: &str = "Index error during summarization.";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("{0}")]
    ValidationError(String),

    /// The summarization capability returned an empty or malformed result set.
    #[error("{}", INDEX_ERROR_MESSAGE)]
    IndexError(String),

    #[error("{0}")]
    SummarizationError(String),

    #[error("Failed to count tokens: {0}")]
    TokenizerError(String),

    #[error("Invalid chunking parameters: {0}")]
    ChunkingError(String),

    #[error("Failed to reach summarization service: {0}")]
    HttpError(String),

    #[error("Failed to persist summary record: {0}")]
    StorageError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SummarizeError {
    /// Whether this error should be answered with a client (4xx) status.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, SummarizeError::ValidationError(_))
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SummarizeError::SummarizationError(format!(
                "Summarization request timed out: {error}"
            ))
        } else {
            SummarizeError::HttpError(error.to_string())
        }
    }
}

impl From<sled::Error> for SummarizeError {
    fn from(error: sled::Error) -> Self {
        SummarizeError::StorageError(error.to_string())
    }
}
