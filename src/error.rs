//! Error types shared by the command surface and the storage layer.

use thiserror::Error;

/// Result type for task operations.
pub type TaskResult<T> = std::result::Result<T, TaskError>;

/// Everything that can go wrong between parsing a command and talking
/// to the task collection.
///
/// Lower layers return these without printing or terminating; the
/// binary entry point decides presentation and exit code.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required setting is absent from the environment.
    #[error("missing required setting: {0}")]
    MissingConfig(&'static str),

    /// The given string is not a valid task identifier.
    #[error("invalid task id '{id}'")]
    InvalidId {
        id: String,
        #[source]
        source: bson::oid::Error,
    },

    /// No task with the given identifier exists.
    #[error("task not found: {0}")]
    NotFound(String),

    /// A task title needs at least one non-whitespace character.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The underlying store failed or rejected the operation.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl TaskError {
    // Convenience constructors

    pub fn invalid_id(id: impl Into<String>, source: bson::oid::Error) -> Self {
        Self::InvalidId {
            id: id.into(),
            source,
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}
