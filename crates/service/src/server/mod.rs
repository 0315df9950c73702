//! Axum HTTP server: routing, handlers, and shared state.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Inject the shared codec (`AppState`) into handlers.
//! - Translate codec errors into JSON error responses.

pub mod handlers;
pub mod router;
pub mod state;
