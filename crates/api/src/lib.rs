//! Tally API
//!
//! HTTP routing, handlers and shared state for the tally aggregator.

pub mod handlers;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
