//! Tag routes

use axum::{extract::State, response::Redirect, Form};
use std::sync::Arc;

use super::MISSIONS_URL;
use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::{Color, NewTagForm, NewTagView};
use crate::error::ApiResult;
use crate::services::lifecycle;

/// GET /tags/new
///
/// Form context: every color name with its code.
pub async fn new_tag_form() -> DataResponse<NewTagView> {
    DataResponse::new(NewTagView::new())
}

/// POST /tags/new
pub async fn create_tag(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewTagForm>,
) -> ApiResult<Redirect> {
    let color = Color::parse_code(&form.color_id)?;

    lifecycle::create_tag(&state.store, &form.name, color.code()).await?;

    Ok(Redirect::to(MISSIONS_URL))
}
