//! Request ID middleware for request tracing
//!
//! Every request gets an `x-request-id` (kept when the client sent one), the ID is
//! echoed on the response, and the per-request trace span records it.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, Request},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::MakeSpan,
};
use tracing::Span;

/// Header name for request ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer pair: set the ID on the way in, copy it to the response on the way out
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    let header_name = HeaderName::from_static(X_REQUEST_ID);

    (
        SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid),
        PropagateRequestIdLayer::new(header_name),
    )
}

/// Extension trait for extracting request ID from headers
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}

/// Debug-level span per request, tagged with method, path and request ID.
/// Must sit inside the layer that sets the ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::debug_span!(
            "request",
            method = %request.method(),
            path = request.uri().path(),
            request_id = request.headers().request_id().unwrap_or("-"),
        )
    }
}
