//! HTTP handlers for the summarization API.
//!
//! This module handles:
//! - Request body parsing and validation
//! - Running the summarization pipeline
//! - Persisting the resulting record
//! - Mapping failures to JSON error responses

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use super::server::AppState;
use crate::core::models::{LengthPreset, Mode, SummaryRecord, SummaryRequest, SummaryResponse};
use crate::errors::{MISSING_TEXT_MESSAGE, SummarizeError};
use crate::features::{derive_title, title::UNTITLED};
use crate::utils::word_count;

/// Inputs shorter than this many words are summarized with a warning.
const SHORT_INPUT_WORDS: usize = 10;

/// Extracts a [`SummaryRequest`] from a JSON body.
///
/// # Errors
///
/// Returns [`SummarizeError::ValidationError`] if `text` is missing, empty or
/// not a string.
pub fn parse_request(body: &Value) -> Result<SummaryRequest, SummarizeError> {
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SummarizeError::ValidationError(MISSING_TEXT_MESSAGE.to_string()))?;

    Ok(SummaryRequest {
        text: text.to_string(),
        length: LengthPreset::parse(body.get("length").and_then(Value::as_str)),
        mode: Mode::parse(body.get("mode").and_then(Value::as_str)),
    })
}

/// `POST /summarize`
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn summarize(State(state): State<AppState>, body: Bytes) -> Response {
    info!("Summarization request initiated.");
    let response = process(&state, &body).await;
    info!("Summarization request completed.");
    response
}

async fn process(state: &AppState, body: &[u8]) -> Response {
    let Ok(json_body) = serde_json::from_slice::<Value>(body) else {
        error!("Request body is not valid JSON.");
        return helpers::client_error("Request body must be valid JSON.");
    };

    let request = match parse_request(&json_body) {
        Ok(request) => request,
        Err(e) => {
            error!("No input text provided.");
            return helpers::error_response(&e, state.debug);
        }
    };

    let original_length = word_count(&request.text);
    if original_length < SHORT_INPUT_WORDS {
        warn!("Short input received. The summary might not be accurate.");
    }

    let output = match state
        .pipeline
        .run(&request.text, request.length.bounds(), request.mode)
        .await
    {
        Ok(output) => output,
        Err(e) => {
            match &e {
                SummarizeError::IndexError(detail) => error!("IndexError: {}", detail),
                other => error!("Error: {}", other),
            }
            if state.persist_failures {
                let title = derive_title(UNTITLED);
                let record = SummaryRecord::failed(&request.text, &title, &e.to_string());
                if let Err(store_err) = state.store.save(&record) {
                    error!("Failed to persist failed attempt: {}", store_err);
                }
            }
            return helpers::error_response(&e, state.debug);
        }
    };

    let title = derive_title(&output.summary);
    let record = SummaryRecord::succeeded(&request.text, &output.summary, &title);
    if let Err(e) = state.store.save(&record) {
        error!("Error: {}", e);
        return helpers::server_error(&e, state.debug);
    }

    info!(
        record_id = %record.id,
        chunks = output.chunk_count,
        "Summary generated successfully for text of length {}.",
        request.text.len()
    );

    helpers::ok_summary(&SummaryResponse {
        title,
        summary_length: word_count(&output.summary),
        summary: output.summary,
        original_length,
        token_count: output.token_count,
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Response {
    helpers::ok_json(&json!({
        "status": "ok",
        "project": state.project_name,
        "records": state.store.count(),
    }))
}
