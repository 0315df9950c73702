//! [`AeadFramedCodec`]: AES-128-GCM seal/open wrapped in the hex frame.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes128Gcm, Nonce,
};
use common::CodecError;
use tracing::debug;

use crate::frame::{self, Unspliced, NONCE_LEN};
use crate::key::KeyMaterial;
use crate::nonce::{NonceSource, OsNonceSource};

/// String-in, string-out encryption, for callers that only deal in text.
pub trait Cryptor {
    /// Encrypt UTF-8 text into a hex blob.
    fn encrypt_text(&self, text: &str) -> Result<String, CodecError>;

    /// Decrypt a hex blob back into UTF-8 text.
    ///
    /// Fails with [`CodecError::InvalidUtf8`] if the plaintext is not text.
    fn decrypt_text(&self, blob: &str) -> Result<String, CodecError>;
}

/// Symmetric codec between plaintext and framed, hex-encoded AES-128-GCM blobs.
///
/// Immutable after construction and safe to share across threads: every call
/// draws its own nonce and builds its own cipher instance.
pub struct AeadFramedCodec<N = OsNonceSource> {
    key: KeyMaterial,
    nonces: N,
}

impl AeadFramedCodec {
    /// Create a codec from a hex key, drawing nonces from the OS CSPRNG.
    ///
    /// Only the hex encoding is checked here; a key shorter than
    /// [`KEY_LEN`](crate::KEY_LEN) bytes is rejected on first use.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyEncoding`] if `hex_key` is not valid hex.
    pub fn new(hex_key: &str) -> Result<Self, CodecError> {
        Self::with_nonce_source(hex_key, OsNonceSource)
    }
}

impl<N: NonceSource> AeadFramedCodec<N> {
    /// Create a codec with an explicit nonce source.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidKeyEncoding`] if `hex_key` is not valid hex.
    pub fn with_nonce_source(hex_key: &str, nonces: N) -> Result<Self, CodecError> {
        Ok(Self {
            key: KeyMaterial::from_hex(hex_key)?,
            nonces,
        })
    }

    /// Whether the stored key is long enough for [`encode`](Self::encode) and
    /// [`decode`](Self::decode) to get past the key check.
    pub fn key_is_usable(&self) -> bool {
        self.key.effective().is_ok()
    }

    /// Seal `plaintext` under a fresh nonce and return the hex blob.
    ///
    /// # Errors
    ///
    /// - [`CodecError::KeyTooShort`] if the key has fewer than 16 bytes.
    /// - [`CodecError::RandomnessUnavailable`] if the nonce source fails.
    /// - [`CodecError::AuthenticationFailed`] on any cipher-level failure.
    pub fn encode(&self, plaintext: &[u8]) -> Result<String, CodecError> {
        let cipher = self.cipher()?;

        let mut nonce = [0u8; NONCE_LEN];
        self.nonces.fill(&mut nonce)?;

        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| CodecError::AuthenticationFailed)?;

        let framed = frame::splice(&nonce, &sealed);
        debug!(
            plaintext_len = plaintext.len(),
            frame_len = framed.len(),
            "encoded blob"
        );
        Ok(hex::encode(framed))
    }

    /// Open a hex blob produced by [`encode`](Self::encode).
    ///
    /// No plaintext is returned unless the tag verifies.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidHexEncoding`] if `blob` is not valid hex.
    /// - [`CodecError::KeyTooShort`] if the key has fewer than 16 bytes.
    /// - [`CodecError::UnsupportedNonceLength`] if the frame does not declare a 12-byte nonce.
    /// - [`CodecError::FrameTooShort`] if the frame cannot hold a nonce and tag.
    /// - [`CodecError::AuthenticationFailed`] on a wrong key or tampered blob.
    pub fn decode(&self, blob: &str) -> Result<Vec<u8>, CodecError> {
        let framed = hex::decode(blob).map_err(CodecError::InvalidHexEncoding)?;
        let cipher = self.cipher()?;

        let Unspliced { nonce, sealed } = frame::unsplice(&framed)?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(&nonce), sealed.as_slice())
            .map_err(|_| CodecError::AuthenticationFailed)?;

        debug!(
            frame_len = framed.len(),
            plaintext_len = plaintext.len(),
            "decoded blob"
        );
        Ok(plaintext)
    }

    /// Fresh cipher for one call. Its expanded key is wiped when it is dropped.
    fn cipher(&self) -> Result<Aes128Gcm, CodecError> {
        let key = self.key.effective()?;
        Aes128Gcm::new_from_slice(key).map_err(|_| CodecError::KeyTooShort { len: key.len() })
    }
}

impl<N: NonceSource> Cryptor for AeadFramedCodec<N> {
    fn encrypt_text(&self, text: &str) -> Result<String, CodecError> {
        self.encode(text.as_bytes())
    }

    fn decrypt_text(&self, blob: &str) -> Result<String, CodecError> {
        String::from_utf8(self.decode(blob)?).map_err(|_| CodecError::InvalidUtf8)
    }
}

impl<N> std::fmt::Debug for AeadFramedCodec<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AeadFramedCodec")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
