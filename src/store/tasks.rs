use crate::domain::{DomainError, DomainResult, NewTask, Status, Task};

use super::{Store, StoreEvent};

/// Database row for task
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: i64,
    mission_id: i64,
    title: String,
    description: String,
    status: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = sqlx::Error;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        // The schema CHECK keeps codes in range; anything else is a decode failure
        let status = Status::from_code(row.status).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Self {
            id: row.id,
            mission_id: row.mission_id,
            title: row.title,
            description: row.description,
            status,
        })
    }
}

impl Store {
    pub async fn get_task(&self, id: i64) -> DomainResult<Task> {
        let row = sqlx::query_as::<_, TaskRow>(
            "SELECT id, mission_id, title, description, status FROM tasks WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::not_found("Task", id))?;

        Ok(row.try_into()?)
    }

    /// Tasks of one mission, oldest first
    pub async fn list_tasks_for_mission(&self, mission_id: i64) -> DomainResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, mission_id, title, description, status FROM tasks WHERE mission_id = ? ORDER BY id"
        )
        .bind(mission_id)
        .fetch_all(&self.pool)
        .await?;

        let tasks = rows
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Store a task. The owning mission must exist.
    pub async fn insert_task(&self, new: NewTask) -> DomainResult<Task> {
        let mut tx = self.pool.begin().await?;

        let mission: Option<i64> = sqlx::query_scalar("SELECT id FROM missions WHERE id = ?")
            .bind(new.mission_id)
            .fetch_optional(&mut *tx)
            .await?;
        if mission.is_none() {
            return Err(DomainError::not_found("Mission", new.mission_id));
        }

        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (title, description, mission_id, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, mission_id, title, description, status
            "#
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.mission_id)
        .bind(new.status.code())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let task = Task::try_from(row)?;
        self.notify(StoreEvent::TaskCreated(task.clone())).await;

        Ok(task)
    }

    /// Replace title and description only. Status and mission are left as stored.
    pub async fn update_task_details(
        &self,
        id: i64,
        title: &str,
        description: &str,
    ) -> DomainResult<Task> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks SET
                title = ?,
                description = ?
            WHERE id = ?
            RETURNING id, mission_id, title, description, status
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::not_found("Task", id))?;

        Ok(row.try_into()?)
    }

    /// Set the status column only
    pub async fn update_task_status(&self, id: i64, status: Status) -> DomainResult<Task> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks SET status = ?
            WHERE id = ?
            RETURNING id, mission_id, title, description, status
            "#,
        )
        .bind(status.code())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::not_found("Task", id))?;

        Ok(row.try_into()?)
    }

    /// Delete a task and hand back the row as it was
    pub async fn delete_task(&self, id: i64) -> DomainResult<Task> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TaskRow>(
            "DELETE FROM tasks WHERE id = ? RETURNING id, mission_id, title, description, status"
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DomainError::not_found("Task", id))?;

        tx.commit().await?;

        Ok(row.try_into()?)
    }
}
