//! AES-128-GCM codec producing self-describing hex blobs.
//!
//! # Blob format
//!
//! ```text
//! [0x0c][ct‖tag[0..12]][nonce (12)][ct‖tag[12..]]   → lowercase hex
//! ```
//!
//! The first 12 bytes of the sealed output sit where a prepended nonce would
//! normally go, and the nonce follows them. Offsets are fixed: existing blobs
//! must keep decoding byte-for-byte.

pub mod codec;
pub mod frame;
pub mod key;
pub mod nonce;

pub use codec::{AeadFramedCodec, Cryptor};
pub use common::CodecError;
pub use frame::{NONCE_LEN, TAG_LEN};
pub use key::KEY_LEN;
pub use nonce::{NonceSource, OsNonceSource};
