//! Byte framing around the sealed AEAD output.
//!
//! ```text
//! offset 0        1               13            25
//!        [len=12] [sealed[0..12]] [nonce(12)]   [sealed[12..]]
//! ```
//!
//! `sealed` is ciphertext followed by the 16-byte GCM tag. Both functions work
//! on fixed offsets and know nothing about the cipher.

use common::CodecError;

/// Byte length of the GCM nonce, also written as the frame's first byte.
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag at the end of the sealed output.
pub const TAG_LEN: usize = 16;

/// Smallest valid frame: length byte plus the sealed output of an empty
/// plaintext (tag only) plus the nonce.
pub const MIN_FRAME_LEN: usize = 1 + NONCE_LEN + TAG_LEN;

const NONCE_START: usize = 1 + NONCE_LEN;
const TAIL_START: usize = NONCE_START + NONCE_LEN;

/// Nonce and sealed bytes recovered from a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unspliced {
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext followed by the tag, back in its original order.
    pub sealed: Vec<u8>,
}

/// Build a frame from a nonce and the sealed AEAD output.
///
/// `sealed` always carries a full tag when it comes from the cipher, so it is
/// longer than [`NONCE_LEN`]. A shorter slice is framed as-is and will not
/// decode.
pub fn splice(nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> Vec<u8> {
    let (head, tail) = sealed.split_at(NONCE_LEN.min(sealed.len()));

    let mut out = Vec::with_capacity(1 + NONCE_LEN + sealed.len());
    out.push(NONCE_LEN as u8);
    out.extend_from_slice(head);
    out.extend_from_slice(nonce);
    out.extend_from_slice(tail);
    out
}

/// Split a frame back into its nonce and sealed bytes.
///
/// # Errors
///
/// - [`CodecError::FrameTooShort`] if the frame is empty or shorter than [`MIN_FRAME_LEN`].
/// - [`CodecError::UnsupportedNonceLength`] if the first byte is not [`NONCE_LEN`].
pub fn unsplice(frame: &[u8]) -> Result<Unspliced, CodecError> {
    let Some(&declared) = frame.first() else {
        return Err(CodecError::FrameTooShort { len: 0 });
    };
    if usize::from(declared) != NONCE_LEN {
        return Err(CodecError::UnsupportedNonceLength(declared));
    }
    if frame.len() < MIN_FRAME_LEN {
        return Err(CodecError::FrameTooShort { len: frame.len() });
    }

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&frame[NONCE_START..TAIL_START]);

    let head = &frame[1..NONCE_START];
    let tail = &frame[TAIL_START..];
    let mut sealed = Vec::with_capacity(head.len() + tail.len());
    sealed.extend_from_slice(head);
    sealed.extend_from_slice(tail);

    Ok(Unspliced { nonce, sealed })
}
