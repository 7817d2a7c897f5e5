//! Fake model capabilities shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use precis::SummarizeError;
use precis::ai::{SamplingConfig, Summarizer, TokenCounter};
use precis::core::models::LengthBounds;

/// One recorded call to the fake summarizer.
#[derive(Debug, Clone)]
pub struct SummarizeCall {
    pub text: String,
    pub bounds: LengthBounds,
    pub sampling: SamplingConfig,
}

type Responder = dyn Fn(&str, usize) -> Result<String, SummarizeError> + Send + Sync;

/// Summarizer that records every call and answers through `respond`, which
/// receives the input text and the zero-based call index.
pub struct RecordingSummarizer {
    calls: Mutex<Vec<SummarizeCall>>,
    respond: Box<Responder>,
}

impl RecordingSummarizer {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&str, usize) -> Result<String, SummarizeError> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    /// Answers every call with the same text.
    pub fn fixed(summary: &str) -> Self {
        let summary = summary.to_string();
        Self::new(move |_, _| Ok(summary.clone()))
    }

    /// Answers call `n` with `"partial n."`.
    pub fn numbered() -> Self {
        Self::new(|_, n| Ok(format!("partial {n}.")))
    }

    pub fn failing(error: fn() -> SummarizeError) -> Self {
        Self::new(move |_, _| Err(error()))
    }

    pub fn calls(&self) -> Vec<SummarizeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
        sampling: &SamplingConfig,
    ) -> Result<String, SummarizeError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(SummarizeCall {
                text: text.to_string(),
                bounds,
                sampling: *sampling,
            });
            calls.len() - 1
        };
        (self.respond)(text, index)
    }
}

/// Counts one token per whitespace-separated word.
pub struct WordTokenizer;

impl TokenCounter for WordTokenizer {
    fn count_tokens(&self, text: &str) -> Result<usize, SummarizeError> {
        Ok(text.split_whitespace().count())
    }
}

pub struct FailingTokenizer;

impl TokenCounter for FailingTokenizer {
    fn count_tokens(&self, _text: &str) -> Result<usize, SummarizeError> {
        Err(SummarizeError::TokenizerError("vocabulary missing".to_string()))
    }
}

/// `count` distinct words: `w0 w1 w2 ...`.
pub fn words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}
