//! Activity log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only record written when missions and tasks are created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogView {
    pub log_entries: Vec<LogEntry>,
}
