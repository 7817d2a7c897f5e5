//! Generation settings passed to the summarization model.
//!
//! The direct path and the chunk-recombination path use different nucleus
//! sampling breadth. They are kept as separate constructors and must not be
//! merged.

use serde::Serialize;

use crate::core::models::Mode;

const BEAMS: u32 = 5;
const TEMPERATURE: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingConfig {
    pub do_sample: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl SamplingConfig {
    /// Settings for summarizing an input that fits the model in one call.
    #[must_use]
    pub fn direct(mode: Mode) -> Self {
        Self {
            do_sample: mode.is_creative(),
            num_beams: Some(BEAMS),
            temperature: Some(TEMPERATURE),
            top_k: Some(50),
            top_p: Some(0.9),
        }
    }

    /// Settings for the first pass over each chunk. Never samples, whatever
    /// the requested mode; everything else is left to the model defaults.
    #[must_use]
    pub fn chunk_pass() -> Self {
        Self {
            do_sample: false,
            num_beams: None,
            temperature: None,
            top_k: None,
            top_p: None,
        }
    }

    /// Settings for re-summarizing the joined chunk summaries.
    #[must_use]
    pub fn recombine(mode: Mode) -> Self {
        Self {
            do_sample: mode.is_creative(),
            num_beams: Some(BEAMS),
            temperature: Some(TEMPERATURE),
            top_k: Some(100),
            top_p: Some(0.95),
        }
    }
}
