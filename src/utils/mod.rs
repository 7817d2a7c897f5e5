pub mod chunking;

pub use chunking::{Chunker, WordWindows};

/// Number of whitespace-separated words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
