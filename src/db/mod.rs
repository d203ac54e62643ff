//! Storage layer: connection handling and task persistence.

pub mod tasks;

pub use tasks::TaskStore;

use crate::config::Config;
use crate::error::TaskResult;
use crate::types::Task;
use bson::doc;
use mongodb::{Client, Collection};
use tracing::{debug, info};

/// Handle to the task collection of the configured database.
///
/// Constructed once in `main` and passed by reference into the command
/// layer. The client is dropped when the handle goes out of scope, so
/// the connection is released on every exit path, error exits included.
#[derive(Clone)]
pub struct Database {
    collection: Collection<Task>,
}

impl Database {
    /// Connect to the configured database and verify it is reachable.
    ///
    /// The driver connects lazily, so a `ping` round-trip is issued
    /// here to surface bad URIs and unreachable servers at startup
    /// instead of on the first query. There is no retry policy; each
    /// invocation is short-lived.
    pub async fn connect(config: &Config) -> TaskResult<Self> {
        debug!(database = %config.database, "connecting");

        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }

    /// The typed task collection handle.
    pub(crate) fn tasks(&self) -> &Collection<Task> {
        &self.collection
    }
}
