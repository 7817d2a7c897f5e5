//! Summarization model client.
//!
//! Talks to a hosted summarization model over HTTP using the Hugging Face
//! inference API request shape.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use super::sampling::SamplingConfig;
use crate::core::models::LengthBounds;
use crate::errors::SummarizeError;

/// The summarization capability: text plus length bounds and generation
/// settings in, summary text out.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SummarizeError::IndexError`] if the model produced an empty
    /// or malformed result set, and another variant for any other failure.
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
        sampling: &SamplingConfig,
    ) -> Result<String, SummarizeError>;
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    min_length: u32,
    max_length: u32,
    #[serde(flatten)]
    sampling: &'a SamplingConfig,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: Option<String>,
}

/// HTTP client for a hosted summarization model.
pub struct HttpSummarizer {
    http: Client,
    endpoint: Url,
    api_token: Option<String>,
}

impl HttpSummarizer {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        endpoint: Url,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizeError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            api_token,
        })
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(
        &self,
        text: &str,
        bounds: LengthBounds,
        sampling: &SamplingConfig,
    ) -> Result<String, SummarizeError> {
        let request_body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                min_length: bounds.min_length,
                max_length: bounds.max_length,
                sampling,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        #[cfg(feature = "debug-logs")]
        info!("Summarizer request body: {:?}", request_body);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary of {} chars (min {}, max {}, sample {})",
            text.len(),
            bounds.min_length,
            bounds.max_length,
            sampling.do_sample
        );

        let mut request = self.http.post(self.endpoint.clone()).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizeError::SummarizationError(format!(
                "Summarization service returned {}: {}",
                status,
                upstream_error_message(&error_text)
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::SummarizationError(format!(
                "Failed to parse summarization response: {}",
                e
            ))
        })?;
        debug!("Summarizer response: {}", response_json);

        first_summary_text(response_json)
    }
}

/// Pulls the first `summary_text` out of a model response.
fn first_summary_text(response_json: Value) -> Result<String, SummarizeError> {
    let items: Vec<SummaryItem> = serde_json::from_value(response_json).map_err(|e| {
        SummarizeError::IndexError(format!("unexpected result set shape: {}", e))
    })?;

    items
        .into_iter()
        .next()
        .ok_or_else(|| SummarizeError::IndexError("empty result set".to_string()))?
        .summary_text
        .ok_or_else(|| SummarizeError::IndexError("result has no summary_text".to_string()))
}

/// Hosted inference endpoints report failures as `{"error": "..."}`.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
