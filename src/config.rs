//! Configuration loading.

use crate::error::{TaskError, TaskResult};

/// Connection settings for the task store.
///
/// All three values are required; the process refuses to run any
/// command without them.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string.
    pub uri: String,
    /// Name of the database holding the task collection.
    pub database: String,
    /// Name of the collection the tasks live in.
    pub collection: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> TaskResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a key lookup function.
    ///
    /// Tests inject a map here instead of mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> TaskResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            uri: require(&lookup, "DATABASE_URI")?,
            database: require(&lookup, "DATABASE_NAME")?,
            collection: require(&lookup, "DATABASE_COLLECTION")?,
        })
    }
}

/// A blank value counts as missing.
fn require<F>(lookup: &F, key: &'static str) -> TaskResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(TaskError::MissingConfig(key))
}
