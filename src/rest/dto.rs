//! Wire formats for the task API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::tasks::domain::{
    FieldUpdate, Task, TaskDomainError, TaskDraft, TaskPatch, TaskPriority, TaskStatus,
};
use crate::tasks::ports::{SortOrder, TaskListQuery, TaskSortKey};

/// Number of records a listing returns when no limit is given.
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Wraps present JSON values in an outer `Some` so an absent key (outer
/// `None`) stays distinguishable from an explicit null (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Raw title; trimmed and validated before storage.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status; defaults to pending.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Urgency level; defaults to medium.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Optional due date; must lie strictly in the future.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl CreateTaskBody {
    /// Converts the body into a domain draft, applying defaults for absent
    /// status and priority.
    #[must_use]
    pub fn into_draft(self) -> TaskDraft {
        let mut draft = TaskDraft::new(self.title);
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = self.status {
            draft = draft.with_status(status);
        }
        if let Some(priority) = self.priority {
            draft = draft.with_priority(priority);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(assigned_to) = self.assigned_to {
            draft = draft.with_assigned_to(assigned_to);
        }
        draft
    }
}

/// Request body for partially updating a task.
///
/// Keys absent from the body keep the stored values. For description, due
/// date and assignee an explicit JSON null clears the stored value; for
/// title, status and priority null is treated the same as an absent key,
/// since those fields cannot be cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, trimmed and validated before storage.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement or cleared description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// Replacement lifecycle status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Replacement urgency level.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Replacement or cleared due date; a replacement must lie strictly in
    /// the future.
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement or cleared assignee.
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<String>>,
}

impl UpdateTaskBody {
    /// Converts the body into a domain patch.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(title);
        }
        if let Some(status) = self.status {
            patch = patch.with_status(status);
        }
        if let Some(priority) = self.priority {
            patch = patch.with_priority(priority);
        }
        patch
            .with_description(FieldUpdate::from(self.description))
            .with_due_date(FieldUpdate::from(self.due_date))
            .with_assigned_to(FieldUpdate::from(self.assigned_to))
    }
}

/// Query parameters accepted by the task listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTasksParams {
    /// Number of matching records to drop from the front.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Status filter in canonical string form.
    #[serde(default)]
    pub status: Option<String>,
    /// Priority filter in canonical string form.
    #[serde(default)]
    pub priority: Option<String>,
    /// Sort column, one of `created_at`, `updated_at` or `due_date`.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort direction, `asc` or `desc`; ascending when absent.
    #[serde(default)]
    pub sort_order: Option<String>,
}

const fn default_limit() -> u64 {
    DEFAULT_LIST_LIMIT
}

impl ListTasksParams {
    /// Parses the raw parameters into a repository query.
    ///
    /// The sort order is validated even when no sort column is given, so a
    /// bogus value never passes silently.
    ///
    /// # Errors
    /// Returns a [`TaskDomainError`] when a filter or sort parameter is
    /// not a member of its closed value set.
    pub fn into_query(self) -> Result<TaskListQuery, TaskDomainError> {
        let mut query = TaskListQuery::new(self.skip, self.limit);
        if let Some(status) = self.status.as_deref() {
            query = query.with_status(TaskStatus::try_from(status)?);
        }
        if let Some(priority) = self.priority.as_deref() {
            query = query.with_priority(TaskPriority::try_from(priority)?);
        }
        let order = self
            .sort_order
            .as_deref()
            .map(SortOrder::try_from)
            .transpose()?
            .unwrap_or_default();
        if let Some(sort_by) = self.sort_by.as_deref() {
            query = query.with_sort(TaskSortKey::try_from(sort_by)?, order);
        }
        Ok(query)
    }
}

/// Response representation of a task record.
///
/// Every field is always present; optional ones serialize as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Urgency level.
    pub priority: TaskPriority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, null until the first update.
    pub updated_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            priority: task.priority(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
            due_date: task.due_date(),
            assigned_to: task.assigned_to().map(str::to_owned),
        }
    }
}
