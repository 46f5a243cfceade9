//! Task routes
//!
//! Task board, task CRUD and status transitions.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use super::{parse_id, parse_optional_id, tasks_url, MISSIONS_URL, TASKS_URL};
use crate::api::{ApiPath, DataResponse};
use crate::app::AppState;
use crate::domain::{
    group_tasks_by_status, EditTaskForm, NewTaskForm, NewTaskView, TaskBoardView,
    TaskListQuery, TaskView,
};
use crate::error::ApiResult;
use crate::services::lifecycle;

/// GET /tasks?mission_id=N
///
/// A mission's tasks grouped by status. Without a mission the client is sent
/// back to the mission list.
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Response> {
    let Some(mission_id) = parse_optional_id("mission_id", query.mission_id.as_deref())? else {
        return Ok(Redirect::to(MISSIONS_URL).into_response());
    };

    let mission = state.store.get_mission(mission_id).await?;
    let tasks = state.store.list_tasks_for_mission(mission.id).await?;

    let view = TaskBoardView {
        mission,
        tasks: group_tasks_by_status(tasks),
    };
    Ok(DataResponse::new(view).into_response())
}

/// GET /tasks/new
///
/// Form context: the missions a task can be filed under.
pub async fn new_task_form(
    State(state): State<Arc<AppState>>,
) -> ApiResult<DataResponse<NewTaskView>> {
    let missions = state.store.list_missions().await?;
    Ok(DataResponse::new(NewTaskView { missions }))
}

/// POST /tasks/new
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewTaskForm>,
) -> ApiResult<Redirect> {
    let mission_id = parse_id("mission_id", &form.mission_id)?;

    let task =
        lifecycle::create_task(&state.store, &form.title, &form.description, mission_id).await?;

    Ok(Redirect::to(&tasks_url(task.mission_id)))
}

/// GET /tasks/:task_id
pub async fn get_task(
    State(state): State<Arc<AppState>>,
    ApiPath(task_id): ApiPath<i64>,
) -> ApiResult<DataResponse<TaskView>> {
    let task = state.store.get_task(task_id).await?;
    Ok(DataResponse::new(TaskView { task }))
}

/// GET /tasks/:task_id/edit
pub async fn edit_task_form(
    State(state): State<Arc<AppState>>,
    ApiPath(task_id): ApiPath<i64>,
) -> ApiResult<DataResponse<TaskView>> {
    let task = state.store.get_task(task_id).await?;
    Ok(DataResponse::new(TaskView { task }))
}

/// POST /tasks/:task_id/edit
pub async fn edit_task(
    State(state): State<Arc<AppState>>,
    ApiPath(task_id): ApiPath<i64>,
    Form(form): Form<EditTaskForm>,
) -> ApiResult<Redirect> {
    let task = lifecycle::edit_task(&state.store, task_id, &form.title, &form.description).await?;
    Ok(Redirect::to(&tasks_url(task.mission_id)))
}

/// GET /tasks/:task_id/set_status/:status
pub async fn set_status(
    State(state): State<Arc<AppState>>,
    ApiPath((task_id, status)): ApiPath<(i64, String)>,
) -> ApiResult<Redirect> {
    lifecycle::set_task_status(&state.store, task_id, &status).await?;
    Ok(Redirect::to(TASKS_URL))
}

/// DELETE /tasks/:task_id
///
/// Responds with the URL of the board the task was on.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    ApiPath(task_id): ApiPath<i64>,
) -> ApiResult<String> {
    let mission_id = lifecycle::delete_task(&state.store, task_id).await?;
    Ok(tasks_url(mission_id))
}
