//! Nonce generation.
//!
//! The codec never reaches for a global RNG; it is handed a [`NonceSource`]
//! at construction. Production code uses [`OsNonceSource`].

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use common::CodecError;

use crate::frame::NONCE_LEN;

/// Supplies a fresh nonce for every encode call.
///
/// Implementations are shared across threads and must never hand out the
/// same nonce twice under one key.
#[cfg_attr(test, mockall::automock)]
pub trait NonceSource: Send + Sync {
    /// Fill `nonce` with fresh bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::RandomnessUnavailable`] if no bytes could be produced.
    fn fill(&self, nonce: &mut [u8; NONCE_LEN]) -> Result<(), CodecError>;
}

/// [`NonceSource`] backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fill(&self, nonce: &mut [u8; NONCE_LEN]) -> Result<(), CodecError> {
        OsRng
            .try_fill_bytes(nonce)
            .map_err(|_| CodecError::RandomnessUnavailable)
    }
}
