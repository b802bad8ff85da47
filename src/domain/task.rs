use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a task, stable for the lifetime of the task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Mints a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaskId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Normalize to the hyphenated lowercase form so ids compare equal
        Uuid::parse_str(s)
            .map(|uuid| Self(uuid.to_string()))
            .map_err(|_| crate::error::BoardError::InvalidId(s.to_string()))
    }
}

impl TryFrom<String> for TaskId {
    type Error = crate::error::BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the board
///
/// Tasks are immutable once created; moving one between columns relocates
/// the value without touching its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a freshly generated ID
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
