//! Domain types and DTOs
//!
//! Entities, form bodies and page contexts for missions, tasks, tags and the activity log.

pub mod enums;
pub mod error;
pub mod grouping;
pub mod log_entries;
pub mod missions;
pub mod tags;
pub mod tasks;

// Re-export commonly used types
pub use enums::{Color, InvalidEnumValue, Status};
pub use error::{DomainError, DomainResult};
pub use grouping::{group_tasks_by_status, TasksByStatus};
pub use log_entries::*;
pub use missions::*;
pub use tags::*;
pub use tasks::*;
