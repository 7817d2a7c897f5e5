//! Response builders shared by the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::core::models::SummaryResponse;
use crate::errors::SummarizeError;

/// Returns a 200 OK response with an arbitrary JSON body.
#[must_use]
pub fn ok_json(body: &Value) -> Response {
    (StatusCode::OK, Json(body.clone())).into_response()
}

/// Returns a 200 OK response with the summary payload.
#[must_use]
pub fn ok_summary(payload: &SummaryResponse) -> Response {
    (StatusCode::OK, Json(json!(payload))).into_response()
}

/// Returns a 400 response in the `{ok: false, error}` form.
#[must_use]
pub fn client_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "ok": false, "error": message })),
    )
        .into_response()
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Maps a pipeline or storage failure to a 500 response. With `debug` set the
/// body also carries the full error under `detail`.
#[must_use]
pub fn server_error(error: &SummarizeError, debug: bool) -> Response {
    let mut body = json!({ "error": error.to_string() });
    if debug {
        body["detail"] = json!(format!("{error:?}"));
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Picks the response for `error`: the `{ok: false}` 400 form for client
/// errors, a 500 otherwise.
#[must_use]
pub fn error_response(error: &SummarizeError, debug: bool) -> Response {
    if error.is_client_error() {
        client_error(&error.to_string())
    } else {
        server_error(error, debug)
    }
}
