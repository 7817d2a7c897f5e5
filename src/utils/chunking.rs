//! Overlapping word-window chunking for inputs that exceed the model limit.

use crate::errors::SummarizeError;

pub const DEFAULT_MAX_WORDS: usize = 700;
pub const DEFAULT_OVERLAP: usize = 100;

/// Splits text into windows of at most `max_words` words, each sharing
/// `overlap` words with the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    max_words: usize,
    overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl Chunker {
    /// # Errors
    ///
    /// Returns [`SummarizeError::ChunkingError`] unless
    /// `0 <= overlap < max_words`; otherwise the window would never advance.
    pub fn new(max_words: usize, overlap: usize) -> Result<Self, SummarizeError> {
        if max_words == 0 {
            return Err(SummarizeError::ChunkingError(
                "max_words must be positive".to_string(),
            ));
        }
        if overlap >= max_words {
            return Err(SummarizeError::ChunkingError(format!(
                "overlap ({overlap}) must be smaller than max_words ({max_words})"
            )));
        }
        Ok(Self { max_words, overlap })
    }

    #[must_use]
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    #[must_use]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Returns a lazy iterator over the windows of `text`. Each call starts
    /// over from the first window.
    #[must_use]
    pub fn chunks<'a>(&self, text: &'a str) -> WordWindows<'a> {
        WordWindows {
            words: text.split_whitespace().collect(),
            max_words: self.max_words,
            step: self.max_words - self.overlap,
            start: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordWindows<'a> {
    words: Vec<&'a str>,
    max_words: usize,
    step: usize,
    start: usize,
}

impl Iterator for WordWindows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.words.len() {
            return None;
        }
        let end = (self.start + self.max_words).min(self.words.len());
        let window = self.words[self.start..end].join(" ");
        self.start += self.step;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.words.len().saturating_sub(self.start).div_ceil(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WordWindows<'_> {}
