//! Activity log observer
//!
//! Listens for creation events and appends a human readable line to the log table.

use futures::future::BoxFuture;
use sqlx::SqlitePool;

use crate::store::{Store, StoreEvent, StoreObserver};

pub struct ActivityLog {
    // Observer-free handle, so logging never re-enters notification
    store: Store,
}

impl ActivityLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            store: Store::new(pool),
        }
    }

    pub fn message_for(event: &StoreEvent) -> String {
        match event {
            StoreEvent::MissionCreated(mission) => {
                format!("Mission \"{}\" was created", mission.title)
            }
            StoreEvent::TaskCreated(task) => format!(
                "Task \"{}\" was created in mission #{}",
                task.title, task.mission_id
            ),
        }
    }
}

impl StoreObserver for ActivityLog {
    fn name(&self) -> &'static str {
        "activity_log"
    }

    fn on_event<'a>(&'a self, event: &'a StoreEvent) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            let entry = self.store.append_log_entry(&Self::message_for(event)).await?;
            tracing::debug!(log_entry_id = entry.id, event = event.kind(), "Activity logged");
            Ok::<(), anyhow::Error>(())
        })
    }
}
