use std::sync::Arc;

use tracing::{info, warn};

use crate::ai::{SamplingConfig, Summarizer, TokenCounter};
use crate::core::models::{LengthBounds, Mode};
use crate::errors::SummarizeError;
use crate::utils::Chunker;

/// Largest input, in model tokens, that is summarized in a single call.
pub const MAX_TOKENS: usize = 1024;

/// Result of running the pipeline over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub summary: String,
    pub token_count: usize,
    /// Number of chunks summarized in the first pass; zero on the direct path.
    pub chunk_count: usize,
}

/// Produces a single summary for inputs of any length.
///
/// Inputs that fit within [`MAX_TOKENS`] are summarized directly. Longer
/// inputs are split into overlapping word windows, each window is summarized
/// without sampling, and the joined partial summaries are summarized once
/// more to give the final result.
pub struct SummarizationPipeline {
    summarizer: Arc<dyn Summarizer>,
    tokenizer: Arc<dyn TokenCounter>,
    chunker: Chunker,
    max_tokens: usize,
}

impl SummarizationPipeline {
    #[must_use]
    pub fn new(summarizer: Arc<dyn Summarizer>, tokenizer: Arc<dyn TokenCounter>) -> Self {
        Self {
            summarizer,
            tokenizer,
            chunker: Chunker::default(),
            max_tokens: MAX_TOKENS,
        }
    }

    #[must_use]
    pub fn with_chunker(mut self, chunker: Chunker) -> Self {
        self.chunker = chunker;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// # Errors
    ///
    /// Returns the first failure from the tokenizer or summarizer. Nothing is
    /// retried.
    pub async fn run(
        &self,
        text: &str,
        bounds: LengthBounds,
        mode: Mode,
    ) -> Result<PipelineOutput, SummarizeError> {
        let token_count = self.tokenizer.count_tokens(text)?;
        info!("Received text with {} tokens.", token_count);

        if token_count <= self.max_tokens {
            let summary = self
                .summarizer
                .summarize(text, bounds, &SamplingConfig::direct(mode))
                .await?;
            return Ok(PipelineOutput {
                summary,
                token_count,
                chunk_count: 0,
            });
        }

        warn!(
            "Input exceeds {} tokens. Chunking the text.",
            self.max_tokens
        );

        let chunk_pass = SamplingConfig::chunk_pass();
        let mut partials = Vec::new();
        for chunk in self.chunker.chunks(text) {
            partials.push(self.summarizer.summarize(&chunk, bounds, &chunk_pass).await?);
        }
        let chunk_count = partials.len();
        info!("Summarized {} chunks, recombining.", chunk_count);

        let combined = partials.join(" ");
        let summary = self
            .summarizer
            .summarize(&combined, bounds, &SamplingConfig::recombine(mode))
            .await?;

        Ok(PipelineOutput {
            summary,
            token_count,
            chunk_count,
        })
    }
}
