use crate::domain::{DomainError, DomainResult, Mission, NewMission};

use super::{Store, StoreEvent};

impl Store {
    pub async fn get_mission(&self, id: i64) -> DomainResult<Mission> {
        sqlx::query_as::<_, Mission>(
            "SELECT id, title, description, tag_id FROM missions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DomainError::not_found("Mission", id))
    }

    pub async fn list_missions(&self) -> DomainResult<Vec<Mission>> {
        let missions = sqlx::query_as::<_, Mission>(
            "SELECT id, title, description, tag_id FROM missions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(missions)
    }

    /// Store a mission. A referenced tag must exist.
    pub async fn insert_mission(&self, new: NewMission) -> DomainResult<Mission> {
        let mut tx = self.pool.begin().await?;

        if let Some(tag_id) = new.tag_id {
            let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
                .bind(tag_id)
                .fetch_optional(&mut *tx)
                .await?;
            if exists.is_none() {
                return Err(DomainError::not_found("Tag", tag_id));
            }
        }

        let mission = sqlx::query_as::<_, Mission>(
            r#"
            INSERT INTO missions (title, description, tag_id)
            VALUES (?, ?, ?)
            RETURNING id, title, description, tag_id
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.tag_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.notify(StoreEvent::MissionCreated(mission.clone())).await;

        Ok(mission)
    }

    /// Delete a mission together with all of its tasks
    pub async fn delete_mission(&self, id: i64) -> DomainResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM missions WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(DomainError::not_found("Mission", id));
        }

        let tasks = sqlx::query("DELETE FROM tasks WHERE mission_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM missions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            mission_id = id,
            tasks_deleted = tasks.rows_affected(),
            "Mission deleted"
        );

        Ok(())
    }
}
