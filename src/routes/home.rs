use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub links: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct FutureResponse {
    pub title: &'static str,
    pub message: &'static str,
}

/// Landing page context
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        links: vec![
            "/missions",
            "/missions/new",
            "/tasks/new",
            "/tags/new",
            "/log",
            "/future",
        ],
    })
}

/// Static placeholder page for features not built yet
pub async fn future() -> Json<FutureResponse> {
    Json(FutureResponse {
        title: "Coming soon",
        message: "This page is not available yet.",
    })
}
