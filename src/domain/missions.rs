//! Mission domain types
//!
//! A mission groups tasks and may carry one tag.

use serde::{Deserialize, Serialize};

use super::tags::Tag;

/// Mission entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Mission {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tag_id: Option<i64>,
}

/// Values for a mission that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewMission {
    pub title: String,
    pub description: String,
    pub tag_id: Option<i64>,
}

/// Form body for `POST /missions/new`
///
/// `tag_id` arrives as text; an empty value means no tag.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMissionForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag_id: Option<String>,
}

/// Page context for the mission list
#[derive(Debug, Clone, Serialize)]
pub struct MissionListView {
    pub missions: Vec<Mission>,
}

/// Page context for the new-mission form
#[derive(Debug, Clone, Serialize)]
pub struct NewMissionView {
    pub tags: Vec<Tag>,
}
