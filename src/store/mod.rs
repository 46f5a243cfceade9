//! Entity store
//!
//! Durable storage for missions, tasks, tags and log entries. Every write runs in
//! a single transaction, and reference checks happen inside that transaction.
//! Inserts of missions and tasks are announced to registered observers once committed.

mod events;
mod log_entries;
mod missions;
mod tags;
mod tasks;

pub use events::{StoreEvent, StoreObserver};

use parking_lot::RwLock;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Handle to the database plus the observer registry.
/// Cloning is cheap and clones share observers.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
    observers: Arc<RwLock<Vec<Arc<dyn StoreObserver>>>>,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Add an observer; it sees every event raised after this call
    pub fn register(&self, observer: Arc<dyn StoreObserver>) {
        tracing::debug!(observer = observer.name(), "Registering store observer");
        self.observers.write().push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Deliver an event to every observer in registration order.
    /// Observer errors are logged and never returned.
    pub async fn notify(&self, event: StoreEvent) {
        // Snapshot so the lock is not held across awaits
        let observers: Vec<Arc<dyn StoreObserver>> = self.observers.read().clone();

        for observer in observers {
            if let Err(e) = observer.on_event(&event).await {
                tracing::warn!(
                    observer = observer.name(),
                    event = event.kind(),
                    error = %e,
                    "Store observer failed"
                );
            }
        }
    }

    /// Lightweight health check for database connectivity
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok()
    }
}
