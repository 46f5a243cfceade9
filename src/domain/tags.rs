//! Tag domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::enums::Color;

/// Colored label attached to missions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: Color,
}

/// Form body for `POST /tags/new`
#[derive(Debug, Clone, Deserialize)]
pub struct NewTagForm {
    pub name: String,
    #[serde(default)]
    pub color_id: String,
}

/// Page context for the new-tag form: color name to code
#[derive(Debug, Clone, Serialize)]
pub struct NewTagView {
    pub colors: BTreeMap<&'static str, i64>,
}

impl NewTagView {
    pub fn new() -> Self {
        Self {
            colors: Color::all().iter().map(|c| (c.name(), c.code())).collect(),
        }
    }
}

impl Default for NewTagView {
    fn default() -> Self {
        Self::new()
    }
}
