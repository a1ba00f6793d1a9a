//! Service layer orchestrating task record operations.

use crate::tasks::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskListQuery, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task record operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// A supplied field failed domain validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The repository failed for reasons other than a missing record.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task record orchestration service.
///
/// Validation happens here, against the injected clock, before any
/// repository call; storage adapters only ever see validated data.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// Derived `Clone` would require `R: Clone` and `C: Clone`.
impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates a draft and persists it, returning the stored task with
    /// its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when a field is rejected,
    /// in which case nothing is persisted, or
    /// [`TaskLifecycleError::Storage`] when the repository fails.
    pub async fn create(&self, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let new_task = draft.validate(&*self.clock)?;
        let task = self.repository.insert(&new_task).await?;
        Ok(task)
    }

    /// Lists tasks matching the query's filters, ordering and window.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the repository fails.
    pub async fn list(&self, query: &TaskListQuery) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(query).await?)
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier, or [`TaskLifecycleError::Storage`] when the repository
    /// fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Applies a partial update to an existing task and returns the
    /// updated record.
    ///
    /// Existence is checked before validation, so a missing task reports
    /// [`TaskLifecycleError::NotFound`] even when the patch also carries
    /// invalid fields. A rejected patch leaves the stored record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier, [`TaskLifecycleError::Validation`] when a supplied field
    /// is rejected, or [`TaskLifecycleError::Storage`] when the repository
    /// fails.
    pub async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskLifecycleResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))?;
        task.apply_patch(patch, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier, or [`TaskLifecycleError::Storage`] when the repository
    /// fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Lists every task with the given status in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the repository fails.
    pub async fn find_by_status(&self, status: TaskStatus) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Lists every task with the given priority in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the repository fails.
    pub async fn find_by_priority(&self, priority: TaskPriority) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_priority(priority).await?)
    }
}
