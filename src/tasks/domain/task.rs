//! Task aggregate and its closed status and priority enumerations.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::TaskDomainError;
use super::fields::{NewTask, TaskPatch};
use super::ids::TaskId;

/// Lifecycle states a task record may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task has been recorded but work has not started.
    #[default]
    Pending,
    /// Work on the task is underway.
    InProgress,
    /// The task has been finished.
    Completed,
    /// The task was abandoned before completion.
    Cancelled,
}

impl TaskStatus {
    /// Canonical string form used for persistence and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(TaskDomainError::UnknownStatus(other.to_owned())),
        }
    }
}

/// Urgency levels a task record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait indefinitely.
    Low,
    /// Ordinary scheduling.
    #[default]
    Medium,
    /// Should be handled soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl TaskPriority {
    /// Canonical string form used for persistence and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(TaskDomainError::UnknownPriority(other.to_owned())),
        }
    }
}

/// Field values required to rebuild a [`Task`] from a storage row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Storage-assigned identifier.
    pub id: TaskId,
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
    /// Timestamp of the most recent update, if any.
    pub updated_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
}

/// A persisted task record.
///
/// Tasks are created by validating a [`super::fields::TaskDraft`] into a
/// [`NewTask`] and handing it to a repository, which assigns the identifier.
/// All field mutation goes through [`Task::apply_patch`] so the validation
/// rules hold for the whole lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
}

impl Task {
    /// Rebuilds a task from previously persisted data without re-validation.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            title,
            description,
            status,
            priority,
            created_at,
            updated_at,
            due_date,
            assigned_to,
        } = data;
        Self {
            id,
            title,
            description,
            status,
            priority,
            created_at,
            updated_at,
            due_date,
            assigned_to,
        }
    }

    /// Combines validated new-task fields with a storage-assigned identifier.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: NewTask) -> Self {
        let NewTask {
            title,
            description,
            status,
            priority,
            created_at,
            due_date,
            assigned_to,
        } = new_task;
        Self {
            id,
            title,
            description,
            status,
            priority,
            created_at,
            updated_at: None,
            due_date,
            assigned_to,
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Trimmed, non-empty title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Optional free-form description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Urgency level.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Creation timestamp, immutable after insert.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the most recent update, `None` until the first update.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Optional due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Optional assignee.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Applies a partial update after validating every supplied field.
    ///
    /// Validation runs against all supplied fields before any of them is
    /// written, so a rejected patch leaves the task untouched. Fields the
    /// patch does not mention keep their current values. On success
    /// `updated_at` is stamped with the clock's current UTC time.
    ///
    /// # Errors
    /// Returns the [`TaskDomainError`] for the first supplied field that
    /// fails validation.
    pub fn apply_patch(
        &mut self,
        patch: &TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let now = clock.utc();
        let TaskPatch {
            title,
            description,
            status,
            priority,
            due_date,
            assigned_to,
        } = patch.normalized(now)?;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        description.write_to(&mut self.description);
        due_date.write_to(&mut self.due_date);
        assigned_to.write_to(&mut self.assigned_to);
        self.updated_at = Some(now);
        Ok(())
    }
}

impl From<Task> for PersistedTaskData {
    fn from(task: Task) -> Self {
        let Task {
            id,
            title,
            description,
            status,
            priority,
            created_at,
            updated_at,
            due_date,
            assigned_to,
        } = task;
        Self {
            id,
            title,
            description,
            status,
            priority,
            created_at,
            updated_at,
            due_date,
            assigned_to,
        }
    }
}
