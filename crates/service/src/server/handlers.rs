//! Axum request handlers for all service endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codec::Cryptor;
use common::{
    protocol::{
        DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse, ErrorResponse,
        HealthResponse,
    },
    CodecError, ServiceError,
};
use tracing::{error, warn};

use super::state::AppState;

/// `POST /encode` — seal the request text into a hex blob.
pub async fn encode(
    State(state): State<AppState>,
    body: Result<Json<EncodeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(req) => req,
        Err(rejection) => return malformed_body("encode", "plaintext", &rejection),
    };
    match state.codec.encrypt_text(&req.plaintext) {
        Ok(blob) => (StatusCode::OK, Json(EncodeResponse { blob })).into_response(),
        Err(e) => codec_failure("encode", &e),
    }
}

/// `POST /decode` — open a hex blob and return its text.
///
/// Blobs that fail authentication are rejected with `400` and no plaintext.
pub async fn decode(
    State(state): State<AppState>,
    body: Result<Json<DecodeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(req) => req,
        Err(rejection) => return malformed_body("decode", "blob", &rejection),
    };
    match state.codec.decrypt_text(&req.blob) {
        Ok(plaintext) => (StatusCode::OK, Json(DecodeResponse { plaintext })).into_response(),
        Err(e) => codec_failure("decode", &e),
    }
}

/// `GET /health` — liveness and readiness check.
///
/// Returns `200 OK` when the configured key is usable, `503` otherwise.
pub async fn health(State(state): State<AppState>) -> Response {
    let key_ready = state.codec.key_is_usable();

    let (status_code, status_str) = if key_ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status: status_str.into(),
        key_ready,
    };
    (status_code, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

/// Reject a body that is not the expected JSON object.
///
/// The rejection text quotes the offending input, so neither the response nor
/// the log carries it.
fn malformed_body(op: &'static str, field: &str, rejection: &JsonRejection) -> Response {
    warn!(op, rejected_status = rejection.status().as_u16(), "malformed request body");

    let service_err = ServiceError::BadRequest(format!(
        "body must be a JSON object with a string `{field}` field"
    ));
    let body = ErrorResponse::new("bad_request", service_err.to_string());
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Map a codec error to its JSON error response, logging only the error code.
fn codec_failure(op: &'static str, e: &CodecError) -> Response {
    let service_err = ServiceError::from(e);
    let status = StatusCode::from_u16(service_err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(op, code = e.code(), "codec failure");
    } else {
        warn!(op, code = e.code(), "request rejected");
    }

    let body = ErrorResponse::new(e.code(), service_err.to_string());
    (status, Json(body)).into_response()
}
