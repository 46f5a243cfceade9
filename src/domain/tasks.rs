//! Task domain types
//!
//! Tasks belong to exactly one mission and move through [`Status`].

use serde::{Deserialize, Serialize};

use super::enums::Status;
use super::grouping::TasksByStatus;
use super::missions::Mission;

/// Task entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub mission_id: i64,
    pub title: String,
    pub description: String,
    pub status: Status,
}

/// Values for a task that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub mission_id: i64,
    pub status: Status,
}

/// Form body for `POST /tasks/new`
#[derive(Debug, Clone, Deserialize)]
pub struct NewTaskForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mission_id: String,
}

/// Form body for `POST /tasks/:id/edit`
#[derive(Debug, Clone, Deserialize)]
pub struct EditTaskForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Query string for `GET /tasks`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListQuery {
    #[serde(default)]
    pub mission_id: Option<String>,
}

/// Page context for a mission's task board
#[derive(Debug, Clone, Serialize)]
pub struct TaskBoardView {
    pub mission: Mission,
    pub tasks: TasksByStatus,
}

/// Page context for the new-task form
#[derive(Debug, Clone, Serialize)]
pub struct NewTaskView {
    pub missions: Vec<Mission>,
}

/// Page context for a single task (detail and edit form)
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub task: Task,
}
