//! Token counting used to decide whether an input must be chunked.

use std::path::Path;

use tracing::info;

use crate::errors::SummarizeError;

/// Counts model tokens in a piece of text, without truncation.
pub trait TokenCounter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded.
    fn count_tokens(&self, text: &str) -> Result<usize, SummarizeError>;
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Character-based fallback used when no tokenizer file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct EstimatingTokenizer;

impl TokenCounter for EstimatingTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize, SummarizeError> {
        Ok(estimate_tokens(text))
    }
}

/// Hugging Face tokenizer loaded from a `tokenizer.json` file.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// # Errors
    ///
    /// Returns an error if the file is missing or is not a valid tokenizer
    /// definition.
    pub fn from_file(path: &Path) -> Result<Self, SummarizeError> {
        let mut inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            SummarizeError::TokenizerError(format!("loading {}: {}", path.display(), e))
        })?;
        inner
            .with_truncation(None)
            .map_err(|e| SummarizeError::TokenizerError(e.to_string()))?;

        info!("Loaded tokenizer from {}", path.display());
        Ok(Self { inner })
    }
}

impl TokenCounter for HfTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize, SummarizeError> {
        self.inner
            .encode(text, true)
            .map(|encoding| encoding.len())
            .map_err(|e| SummarizeError::TokenizerError(e.to_string()))
    }
}
