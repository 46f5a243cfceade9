use crate::domain::{Color, DomainError, DomainResult, Tag};

use super::Store;

#[derive(Debug, sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
    color: i64,
}

impl TryFrom<TagRow> for Tag {
    type Error = sqlx::Error;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            color: Color::from_code(row.color).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        })
    }
}

impl Store {
    pub async fn get_tag(&self, id: i64) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, color FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DomainError::not_found("Tag", id))?;

        Ok(row.try_into()?)
    }

    pub async fn list_tags(&self) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>("SELECT id, name, color FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let tags = rows
            .into_iter()
            .map(Tag::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    pub async fn insert_tag(&self, name: &str, color: Color) -> DomainResult<Tag> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, color) VALUES (?, ?) RETURNING id, name, color",
        )
        .bind(name)
        .bind(color.code())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.try_into()?)
    }
}
