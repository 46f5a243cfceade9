pub mod health;
pub mod home;
pub mod log;
pub mod missions;
pub mod tags;
pub mod tasks;

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::ApiError;

pub const MISSIONS_URL: &str = "/missions";
pub const TASKS_URL: &str = "/tasks";

/// Board URL for one mission
pub fn tasks_url(mission_id: i64) -> String {
    format!("{TASKS_URL}?mission_id={mission_id}")
}

/// Build the router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home::index))
        .route("/future", get(home::future))
        .route("/health", get(health::health_check))
        // Missions
        .route("/missions", get(missions::list_missions))
        .route(
            "/missions/new",
            get(missions::new_mission_form).post(missions::create_mission),
        )
        .route("/missions/:mission_id", delete(missions::delete_mission))
        // Tasks
        .route("/tasks", get(tasks::list_tasks))
        .route(
            "/tasks/new",
            get(tasks::new_task_form).post(tasks::create_task),
        )
        .route(
            "/tasks/:task_id",
            get(tasks::get_task).delete(tasks::delete_task),
        )
        .route(
            "/tasks/:task_id/edit",
            get(tasks::edit_task_form).post(tasks::edit_task),
        )
        .route(
            "/tasks/:task_id/set_status/:status",
            get(tasks::set_status),
        )
        // Tags
        .route("/tags/new", get(tags::new_tag_form).post(tags::create_tag))
        // Activity log
        .route("/log", get(log::list_log_entries))
}

/// Parse a required integer id sent as form or query text
pub(crate) fn parse_id(field: &str, raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("{field} must be an integer, got '{raw}'")))
}

/// Like [`parse_id`], but a missing or blank value means "none"
pub(crate) fn parse_optional_id(field: &str, raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_id(field, value).map(Some),
    }
}
