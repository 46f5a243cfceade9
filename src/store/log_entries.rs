use chrono::Utc;

use crate::domain::{DomainResult, LogEntry};

use super::Store;

impl Store {
    pub async fn list_log_entries(&self) -> DomainResult<Vec<LogEntry>> {
        let entries = sqlx::query_as::<_, LogEntry>(
            "SELECT id, created_at, message FROM log_entries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Append a log entry stamped with the current time
    pub async fn append_log_entry(&self, message: &str) -> DomainResult<LogEntry> {
        let entry = sqlx::query_as::<_, LogEntry>(
            "INSERT INTO log_entries (created_at, message) VALUES (?, ?) RETURNING id, created_at, message",
        )
        .bind(Utc::now())
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }
}
