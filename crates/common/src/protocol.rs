//! Request and response types exchanged between components.
//!
//! These types are serialised as JSON over the `hexseal-svc` HTTP API.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Encode endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeRequest {
    /// UTF-8 text to seal.
    pub plaintext: String,
}

/// Successful response body for `POST /encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResponse {
    /// Lowercase hex encoding of the framed ciphertext.
    pub blob: String,
}

// ---------------------------------------------------------------------------
// Decode endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    /// Hex blob previously produced by `/encode` (or any compatible encoder).
    pub blob: String,
}

/// Successful response body for `POST /decode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeResponse {
    pub plaintext: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"authentication_failed"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Whether the configured key is long enough to encode and decode.
    pub key_ready: bool,
}
