//! Task CRUD operations against the document store.

use super::Database;
use crate::error::{TaskError, TaskResult};
use crate::types::{Task, TaskFilter};
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::Utc;
use futures_util::TryStreamExt;
use tracing::debug;

/// Typed operations over the task collection.
///
/// This is the seam between the command surface and storage: commands
/// talk to the trait, integration tests substitute an in-memory
/// implementation.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks matching `filter`, in the store's natural cursor
    /// order. Zero matches is an empty list, not an error.
    async fn list_all(&self, filter: TaskFilter) -> TaskResult<Vec<Task>>;

    /// Tasks restricted to the given completion state.
    async fn filter_by_status(&self, completed: bool) -> TaskResult<Vec<Task>> {
        self.list_all(TaskFilter::by_status(completed)).await
    }

    /// Insert a new task document.
    async fn add(&self, task: &Task) -> TaskResult<()>;

    /// Mark the task as completed and refresh its `updated_at`.
    /// Completing an already-completed task is an idempotent success.
    async fn complete(&self, id: &str) -> TaskResult<()>;

    /// Remove the task.
    async fn delete(&self, id: &str) -> TaskResult<()>;
}

/// Parse a user-supplied id into the store's identifier format.
///
/// Malformed input fails validation here, before storage is contacted.
pub fn parse_task_id(id: &str) -> TaskResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|source| TaskError::invalid_id(id, source))
}

fn filter_document(filter: TaskFilter) -> Document {
    match filter.completed {
        Some(completed) => doc! { "completed": completed },
        None => Document::new(),
    }
}

#[async_trait]
impl TaskStore for Database {
    async fn list_all(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let cursor = self.tasks().find(filter_document(filter)).await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;

        debug!(count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    async fn add(&self, task: &Task) -> TaskResult<()> {
        self.tasks().insert_one(task).await?;

        debug!(id = %task.id, "task inserted");
        Ok(())
    }

    async fn complete(&self, id: &str) -> TaskResult<()> {
        let object_id = parse_task_id(id)?;

        let update = doc! {
            "$set": {
                "completed": true,
                "updated_at": bson::DateTime::from_chrono(Utc::now()),
            }
        };
        let result = self
            .tasks()
            .update_one(doc! { "_id": object_id }, update)
            .await?;
        if result.matched_count == 0 {
            return Err(TaskError::not_found(id));
        }

        debug!(%id, "task completed");
        Ok(())
    }

    async fn delete(&self, id: &str) -> TaskResult<()> {
        let object_id = parse_task_id(id)?;

        let result = self.tasks().delete_one(doc! { "_id": object_id }).await?;
        if result.deleted_count == 0 {
            return Err(TaskError::not_found(id));
        }

        debug!(%id, "task deleted");
        Ok(())
    }
}
