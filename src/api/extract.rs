//! Request extractors with the standard error body

use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// `Path` whose rejection is rendered as an [`ApiError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
