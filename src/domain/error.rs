//! Errors raised by the store and lifecycle operations

use thiserror::Error;

use super::enums::InvalidEnumValue;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    InvalidEnumValue(#[from] InvalidEnumValue),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
