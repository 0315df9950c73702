//! Common types, protocol definitions, and errors shared across `hexseal` crates.

pub mod error;
pub mod protocol;

pub use error::{CodecError, ServiceError};
