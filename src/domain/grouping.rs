//! Grouping of a mission's tasks for the board view

use std::collections::BTreeMap;

use super::enums::Status;
use super::tasks::Task;

/// Tasks keyed by status, iterated in status code order.
/// Serializes as an object keyed by status name.
pub type TasksByStatus = BTreeMap<Status, Vec<Task>>;

/// Partition tasks by status, keeping arrival order inside each group.
/// Statuses with no tasks get no entry.
pub fn group_tasks_by_status(tasks: impl IntoIterator<Item = Task>) -> TasksByStatus {
    let mut grouped = TasksByStatus::new();
    for task in tasks {
        grouped.entry(task.status).or_default().push(task);
    }
    grouped
}
