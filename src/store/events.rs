//! Creation events and the observer interface
//!
//! Observers run in-process after the write has committed. They cannot veto
//! or roll back the write; a failing observer is logged and skipped.

use futures::future::BoxFuture;

use crate::domain::{Mission, Task};

/// Event emitted after a successful insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    MissionCreated(Mission),
    TaskCreated(Task),
}

impl StoreEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissionCreated(_) => "mission_created",
            Self::TaskCreated(_) => "task_created",
        }
    }
}

/// Receives store events
pub trait StoreObserver: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    fn on_event<'a>(&'a self, event: &'a StoreEvent) -> BoxFuture<'a, anyhow::Result<()>>;
}
