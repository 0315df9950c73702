//! Tracing setup: structured JSON logs, plus optional OTLP span export.
//!
//! # Telemetry invariants
//!
//! - **No plaintext, nonce, or key material** may appear in any span
//!   attribute or log field. Only byte lengths and error codes are recorded.
//! - Log level is configurable via `HEXSEAL_LOG_LEVEL` (default: `info`);
//!   `RUST_LOG` takes precedence when set.

pub mod init;

pub use init::init_telemetry;
