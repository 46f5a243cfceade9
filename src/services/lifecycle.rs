//! Lifecycle operations for missions, tasks and tags
//!
//! Each operation validates its references and enum inputs, then performs one
//! store write. Failures come back as [`DomainError`]; nothing is retried.

use crate::domain::{
    Color, DomainResult, Mission, NewMission, NewTask, Status, Tag, Task,
};
use crate::store::Store;

/// Create a mission, optionally labelled with an existing tag
pub async fn create_mission(
    store: &Store,
    title: &str,
    description: &str,
    tag_id: Option<i64>,
) -> DomainResult<Mission> {
    let mission = store
        .insert_mission(NewMission {
            title: title.to_string(),
            description: description.to_string(),
            tag_id,
        })
        .await?;

    tracing::info!(mission_id = mission.id, title = %mission.title, "Mission created");
    Ok(mission)
}

/// Create a task in the initial status under an existing mission
pub async fn create_task(
    store: &Store,
    title: &str,
    description: &str,
    mission_id: i64,
) -> DomainResult<Task> {
    let task = store
        .insert_task(NewTask {
            title: title.to_string(),
            description: description.to_string(),
            mission_id,
            status: Status::INITIAL,
        })
        .await?;

    tracing::info!(task_id = task.id, mission_id, title = %task.title, "Task created");
    Ok(task)
}

/// Replace a task's title and description; status is left alone
pub async fn edit_task(
    store: &Store,
    task_id: i64,
    title: &str,
    description: &str,
) -> DomainResult<Task> {
    let task = store
        .update_task_details(task_id, title, description)
        .await?;

    tracing::info!(task_id, "Task edited");
    Ok(task)
}

/// Move a task to the status named by `status_name` (case-insensitive)
pub async fn set_task_status(store: &Store, task_id: i64, status_name: &str) -> DomainResult<Task> {
    // A missing task is NotFound even when the name is also invalid
    let previous = store.get_task(task_id).await?.status;
    let status = Status::from_name(status_name)?;

    let task = store.update_task_status(task_id, status).await?;

    tracing::info!(task_id, from = %previous, to = %status, "Task status changed");
    Ok(task)
}

/// Delete a task, returning the mission it belonged to
pub async fn delete_task(store: &Store, task_id: i64) -> DomainResult<i64> {
    let task = store.delete_task(task_id).await?;

    tracing::info!(task_id, mission_id = task.mission_id, "Task deleted");
    Ok(task.mission_id)
}

/// Delete a mission and every task it owns
pub async fn delete_mission(store: &Store, mission_id: i64) -> DomainResult<()> {
    store.delete_mission(mission_id).await?;

    tracing::info!(mission_id, "Mission deleted");
    Ok(())
}

/// Create a tag from a numeric color code
pub async fn create_tag(store: &Store, name: &str, color_code: i64) -> DomainResult<Tag> {
    let color = Color::from_code(color_code)?;
    let tag = store.insert_tag(name, color).await?;

    tracing::info!(tag_id = tag.id, color = %tag.color, "Tag created");
    Ok(tag)
}
