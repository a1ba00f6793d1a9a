//! Repository port for task record persistence.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::tasks::domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus};
use crate::tasks::ports::TaskListQuery;

/// Convenience alias for repository results.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Errors surfaced by task repository implementations.
#[derive(Debug, Error, Clone)]
pub enum TaskRepositoryError {
    /// No record exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The underlying store failed or returned data the domain rejects.
    #[error("persistence failure: {0}")]
    Persistence(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps an arbitrary error into the [`TaskRepositoryError::Persistence`]
    /// variant.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Persistence operations every task store must provide.
///
/// Implementations assign identifiers on insert and preserve insertion
/// order as the natural order of unsorted listings.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a validated new task and returns the stored record with its
    /// assigned identifier.
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Fetches a task by identifier, `None` when no record exists.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Lists tasks matching the query's filters, ordering and window.
    async fn list(&self, query: &TaskListQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces the stored record carrying the task's identifier.
    ///
    /// Fails with [`TaskRepositoryError::NotFound`] when no such record
    /// exists.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes the record with the given identifier.
    ///
    /// Fails with [`TaskRepositoryError::NotFound`] when no such record
    /// exists.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Lists every task with the given status in natural order.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Lists every task with the given priority in natural order.
    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>>;
}
