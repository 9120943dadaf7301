//! HTTP server module.
//!
//! An axum-based REST boundary over the aggregation core. Handlers parse
//! and validate the request, delegate to the [`crate::services`] layer and
//! serialize the result; CORS, compression and tracing are router
//! middleware.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
