// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request spans with correlation IDs and the CORS layer

/// CORS layer construction
pub mod cors;
/// Per-request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{make_request_span, request_id, REQUEST_ID_HEADER};
