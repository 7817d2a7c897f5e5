//! Model-facing capabilities: summarization and token counting

pub mod client;
pub mod sampling;
pub mod tokenizer;

// Re-export main types for convenience
pub use client::{HttpSummarizer, Summarizer};
pub use sampling::SamplingConfig;
pub use tokenizer::{EstimatingTokenizer, HfTokenizer, TokenCounter, estimate_tokens};
