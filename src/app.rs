use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::middleware::{request_id_layers, RequestSpan, X_REQUEST_ID};
use crate::routes;
use crate::services::ActivityLog;
use crate::store::Store;

/// Shared application state
pub struct AppState {
    pub store: Store,
    pub settings: Settings,
}

impl AppState {
    /// Wrap the store and attach the activity log observer
    pub fn new(store: Store, settings: Settings) -> Arc<Self> {
        store.register(Arc::new(ActivityLog::new(store.pool().clone())));

        Arc::new(Self { store, settings })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(&state.settings);

    // Spans carry the request ID set by the outer layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    // Request ID layers
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .merge(routes::api_router())
        // Middleware stack (applied bottom-up)
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // In dev mode, use longer preflight cache to reduce OPTIONS requests
    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static(X_REQUEST_ID),
        ]))
        .allow_credentials(true)
        .max_age(max_age)
}
