//! [`KeyMaterial`]: raw key bytes decoded from the configured hex string.

use common::CodecError;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte length of the AES-128 key actually handed to the cipher.
pub const KEY_LEN: usize = 16;

/// Key bytes as decoded from hex, before any length check.
///
/// Length is validated on use, not on construction: a short key only fails
/// once something is encoded or decoded with it. Longer keys are accepted and
/// only their first [`KEY_LEN`] bytes are used.
///
/// The buffer is wiped on drop. `Debug` is written by hand so the bytes never
/// show up in logs.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial(Vec<u8>);

impl KeyMaterial {
    /// Decode key material from a hex string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyEncoding`] if `hex_key` is not valid hex
    /// (including an odd number of digits).
    pub fn from_hex(hex_key: &str) -> Result<Self, CodecError> {
        hex::decode(hex_key)
            .map(Self)
            .map_err(CodecError::InvalidKeyEncoding)
    }

    /// Number of decoded bytes, which may differ from [`KEY_LEN`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The [`KEY_LEN`]-byte prefix used by the cipher.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::KeyTooShort`] if fewer than [`KEY_LEN`] bytes were decoded.
    pub fn effective(&self) -> Result<&[u8], CodecError> {
        self.0
            .get(..KEY_LEN)
            .ok_or(CodecError::KeyTooShort { len: self.0.len() })
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Length only; key bytes never reach logs.
        write!(f, "KeyMaterial([REDACTED; {}])", self.0.len())
    }
}
