//! Core types for the task tracker.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted to-do item.
///
/// Decoded once at the storage boundary. The stored document shape is
/// `{_id, title, completed, created_at, updated_at}`; timestamps are
/// BSON datetimes bridged to chrono via serde helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub completed: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// New pending task with a freshly generated identifier.
    /// Both timestamps start at the creation instant.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            title: title.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Predicate describing which stored tasks a query matches.
///
/// The empty filter matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub completed: Option<bool>,
}

impl TaskFilter {
    /// Match every task.
    pub fn all() -> Self {
        Self::default()
    }

    /// Match tasks with the given completion state.
    pub fn by_status(completed: bool) -> Self {
        Self {
            completed: Some(completed),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.completed
            .is_none_or(|completed| task.completed == completed)
    }
}
