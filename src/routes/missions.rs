//! Mission routes

use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use std::sync::Arc;

use super::{parse_optional_id, MISSIONS_URL};
use crate::api::{ApiPath, DataResponse};
use crate::app::AppState;
use crate::domain::{MissionListView, NewMissionForm, NewMissionView};
use crate::error::ApiResult;
use crate::services::lifecycle;

/// GET /missions
pub async fn list_missions(
    State(state): State<Arc<AppState>>,
) -> ApiResult<DataResponse<MissionListView>> {
    let missions = state.store.list_missions().await?;
    Ok(DataResponse::new(MissionListView { missions }))
}

/// GET /missions/new
///
/// Form context: the tags a new mission may carry.
pub async fn new_mission_form(
    State(state): State<Arc<AppState>>,
) -> ApiResult<DataResponse<NewMissionView>> {
    let tags = state.store.list_tags().await?;
    Ok(DataResponse::new(NewMissionView { tags }))
}

/// POST /missions/new
pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewMissionForm>,
) -> ApiResult<Redirect> {
    let tag_id = parse_optional_id("tag_id", form.tag_id.as_deref())?;

    lifecycle::create_mission(&state.store, &form.title, &form.description, tag_id).await?;

    Ok(Redirect::to(MISSIONS_URL))
}

/// DELETE /missions/:mission_id
///
/// Responds with the URL the client should navigate to next.
pub async fn delete_mission(
    State(state): State<Arc<AppState>>,
    ApiPath(mission_id): ApiPath<i64>,
) -> ApiResult<String> {
    lifecycle::delete_mission(&state.store, mission_id).await?;
    Ok(MISSIONS_URL.to_string())
}
