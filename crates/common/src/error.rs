//! Common error types shared across crates.

use thiserror::Error;

/// Errors produced by the framed AEAD codec.
///
/// None of these are retryable: the input (or the configured key) has to be
/// corrected before calling again.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The configured key string is not valid hexadecimal.
    #[error("key is not valid hex: {0}")]
    InvalidKeyEncoding(#[source] hex::FromHexError),

    /// The decoded key material is shorter than the 16 bytes the cipher needs.
    #[error("key must be at least 16 bytes, got {len}")]
    KeyTooShort { len: usize },

    /// The blob handed to `decode` is not valid hexadecimal.
    #[error("blob is not valid hex: {0}")]
    InvalidHexEncoding(#[source] hex::FromHexError),

    /// The blob declares a nonce length other than 12.
    #[error("unsupported nonce length: {0}")]
    UnsupportedNonceLength(u8),

    /// The blob is too short to hold the length byte, nonce and tag.
    #[error("blob too short: {len} bytes")]
    FrameTooShort { len: usize },

    /// Tag verification failed: tampered data, truncation, or the wrong key.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The secure random source could not produce nonce bytes.
    #[error("secure randomness unavailable")]
    RandomnessUnavailable,

    /// The decrypted plaintext is not valid UTF-8 text.
    #[error("plaintext is not valid utf-8")]
    InvalidUtf8,
}

impl CodecError {
    /// Short machine-readable code for this error, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::InvalidKeyEncoding(_) => "invalid_key_encoding",
            CodecError::KeyTooShort { .. } => "key_too_short",
            CodecError::InvalidHexEncoding(_) => "invalid_hex_encoding",
            CodecError::UnsupportedNonceLength(_) => "unsupported_nonce_length",
            CodecError::FrameTooShort { .. } => "frame_too_short",
            CodecError::AuthenticationFailed => "authentication_failed",
            CodecError::RandomnessUnavailable => "randomness_unavailable",
            CodecError::InvalidUtf8 => "invalid_utf8",
        }
    }
}

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::EncryptionFailure`] → 500
/// - [`ServiceError::Unavailable`] → 503
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — invalid JSON, a bad blob, or a blob that fails authentication.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Encryption or decryption failed because the service itself is misconfigured.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),

    /// A required resource (secure randomness) is temporarily unavailable.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::EncryptionFailure(_) => 500,
            ServiceError::Unavailable(_) => 503,
        }
    }
}

impl From<&CodecError> for ServiceError {
    fn from(e: &CodecError) -> Self {
        match e {
            CodecError::InvalidHexEncoding(_)
            | CodecError::UnsupportedNonceLength(_)
            | CodecError::FrameTooShort { .. }
            | CodecError::AuthenticationFailed
            | CodecError::InvalidUtf8 => ServiceError::BadRequest(e.to_string()),
            // Key problems are operator errors; keep the detail out of the response.
            CodecError::InvalidKeyEncoding(_) | CodecError::KeyTooShort { .. } => {
                ServiceError::EncryptionFailure("codec key is misconfigured".into())
            }
            CodecError::RandomnessUnavailable => ServiceError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).http_status(), 400);
        assert_eq!(
            ServiceError::EncryptionFailure("x".into()).http_status(),
            500
        );
        assert_eq!(ServiceError::Unavailable("x".into()).http_status(), 503);
    }

    #[test]
    fn display_includes_message() {
        let e = ServiceError::BadRequest("blob is not valid hex".into());
        assert!(e.to_string().contains("blob is not valid hex"));
    }

    #[test]
    fn codec_errors_map_to_statuses() {
        let bad_blob = CodecError::InvalidHexEncoding(hex::FromHexError::OddLength);
        assert_eq!(ServiceError::from(&bad_blob).http_status(), 400);
        assert_eq!(
            ServiceError::from(&CodecError::AuthenticationFailed).http_status(),
            400
        );
        assert_eq!(
            ServiceError::from(&CodecError::UnsupportedNonceLength(7)).http_status(),
            400
        );
        assert_eq!(
            ServiceError::from(&CodecError::KeyTooShort { len: 2 }).http_status(),
            500
        );
        assert_eq!(
            ServiceError::from(&CodecError::RandomnessUnavailable).http_status(),
            503
        );
    }

    #[test]
    fn key_errors_do_not_leak_detail() {
        let e = ServiceError::from(&CodecError::KeyTooShort { len: 3 });
        assert!(!e.to_string().contains('3'));
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            CodecError::InvalidKeyEncoding(hex::FromHexError::OddLength).code(),
            CodecError::KeyTooShort { len: 0 }.code(),
            CodecError::InvalidHexEncoding(hex::FromHexError::OddLength).code(),
            CodecError::UnsupportedNonceLength(0).code(),
            CodecError::FrameTooShort { len: 0 }.code(),
            CodecError::AuthenticationFailed.code(),
            CodecError::RandomnessUnavailable.code(),
            CodecError::InvalidUtf8.code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }
}
