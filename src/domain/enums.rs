//! Closed enumerations stored as integer codes
//!
//! `Status` drives the task lifecycle; `Color` is a plain label for tags.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when user input names a member that does not exist
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidEnumValue {
    #[error("unknown status '{0}'")]
    Status(String),

    #[error("unknown color '{0}'")]
    Color(String),
}

/// Task status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Done,
    Archived,
}

impl Status {
    /// State every new task starts in
    pub const INITIAL: Status = Status::Todo;

    const ALL: [Status; 4] = [
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Archived,
    ];

    /// All members in code order
    pub fn all() -> &'static [Status] {
        &Self::ALL
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Todo => 1,
            Self::InProgress => 2,
            Self::Done => 3,
            Self::Archived => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Look up a status by name, ignoring case (`done`, `In_Progress`, ...)
    pub fn from_name(name: &str) -> Result<Self, InvalidEnumValue> {
        let wanted = name.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|s| s.name() == wanted)
            .ok_or_else(|| InvalidEnumValue::Status(name.to_string()))
    }

    pub fn from_code(code: i64) -> Result<Self, InvalidEnumValue> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| InvalidEnumValue::Status(code.to_string()))
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tag color enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
}

impl Color {
    const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Gray,
    ];

    pub fn all() -> &'static [Color] {
        &Self::ALL
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Red => 1,
            Self::Orange => 2,
            Self::Yellow => 3,
            Self::Green => 4,
            Self::Blue => 5,
            Self::Purple => 6,
            Self::Gray => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Orange => "ORANGE",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Purple => "PURPLE",
            Self::Gray => "GRAY",
        }
    }

    pub fn from_code(code: i64) -> Result<Self, InvalidEnumValue> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| InvalidEnumValue::Color(code.to_string()))
    }

    /// Parse a raw form value such as `"3"` into a color.
    /// Anything that is not an integer code is rejected the same way as an unknown code.
    pub fn parse_code(raw: &str) -> Result<Self, InvalidEnumValue> {
        let code = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| InvalidEnumValue::Color(raw.to_string()))?;
        Self::from_code(code)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
