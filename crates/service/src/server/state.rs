//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use codec::AeadFramedCodec;

/// Application state shared across all request handlers.
///
/// The codec is immutable, so handlers share one instance behind an `Arc`
/// without any locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub codec: Arc<AeadFramedCodec>,
}

impl AppState {
    pub fn new(codec: AeadFramedCodec) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "1ab3adcf15eeb01bc812aae31b24efb5";

    #[test]
    fn debug_does_not_expose_key() {
        let state = AppState::new(AeadFramedCodec::new(KEY).unwrap());
        let shown = format!("{state:?}");
        assert!(shown.contains("REDACTED"));
        assert!(!shown.contains(KEY));
        assert!(!shown.contains("26, 179"));
    }
}
