//! Candidate field sets for creating and updating tasks.
//!
//! [`TaskDraft`] collects raw create-time input and validates into a
//! [`NewTask`], the only way to obtain one. [`TaskPatch`] describes a
//! partial update, using [`FieldUpdate`] for the fields where clearing an
//! existing value is distinct from leaving it alone.

use chrono::{DateTime, Utc};
use mockable::Clock;

use super::error::TaskDomainError;
use super::ids::TaskId;
use super::task::{Task, TaskPriority, TaskStatus};

/// Maximum title length in characters, counted after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Maximum assignee length in characters.
pub const ASSIGNEE_MAX_CHARS: usize = 100;

fn normalize_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    let actual = trimmed.chars().count();
    if actual > TITLE_MAX_CHARS {
        return Err(TaskDomainError::TitleTooLong {
            max: TITLE_MAX_CHARS,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}

fn validate_description(value: &str) -> Result<(), TaskDomainError> {
    let actual = value.chars().count();
    if actual > DESCRIPTION_MAX_CHARS {
        return Err(TaskDomainError::DescriptionTooLong {
            max: DESCRIPTION_MAX_CHARS,
            actual,
        });
    }
    Ok(())
}

fn validate_assignee(value: &str) -> Result<(), TaskDomainError> {
    let actual = value.chars().count();
    if actual > ASSIGNEE_MAX_CHARS {
        return Err(TaskDomainError::AssigneeTooLong {
            max: ASSIGNEE_MAX_CHARS,
            actual,
        });
    }
    Ok(())
}

fn validate_due_date(due: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), TaskDomainError> {
    if due <= now {
        return Err(TaskDomainError::DueDateNotInFuture(due));
    }
    Ok(())
}

/// Raw candidate fields for creating a task.
///
/// Absent status and priority fall back to [`TaskStatus::Pending`] and
/// [`TaskPriority::Medium`]. The draft holds input exactly as supplied;
/// normalization and validation happen in [`TaskDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    assigned_to: Option<String>,
}

impl TaskDraft {
    /// Starts a draft with the given raw title and default status and
    /// priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            assigned_to: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the default status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Overrides the default priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Validates the draft into a [`NewTask`], stamping the creation time
    /// from the clock.
    ///
    /// The title is trimmed before the length checks and stored in trimmed
    /// form. A supplied due date must lie strictly after the clock's
    /// current UTC time.
    ///
    /// # Errors
    /// Returns the [`TaskDomainError`] for the first field that fails
    /// validation.
    pub fn validate(self, clock: &impl Clock) -> Result<NewTask, TaskDomainError> {
        let now = clock.utc();
        let title = normalize_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(assigned_to) = &self.assigned_to {
            validate_assignee(assigned_to)?;
        }
        if let Some(due_date) = self.due_date {
            validate_due_date(due_date, now)?;
        }
        Ok(NewTask {
            title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            created_at: now,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
        })
    }
}

/// Validated, normalized fields for a task that has not been persisted yet.
///
/// Obtained only through [`TaskDraft::validate`]; repositories assign the
/// identifier and turn it into a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) status: TaskStatus,
    pub(super) priority: TaskPriority,
    pub(super) created_at: DateTime<Utc>,
    pub(super) due_date: Option<DateTime<Utc>>,
    pub(super) assigned_to: Option<String>,
}

impl NewTask {
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

    /// Creation timestamp stamped during validation.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Optional due date, strictly in the future at validation time.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Optional assignee.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Attaches the storage-assigned identifier, producing the full
    /// aggregate.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task::from_new(id, self)
    }
}

/// Update instruction for a single optional field.
///
/// Distinguishes "leave the field alone" from "clear the stored value",
/// which an `Option` alone cannot express once absent and null both appear
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Keep the current value.
    Keep,
    /// Remove the current value.
    Clear,
    /// Replace the current value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Returns `true` when the update leaves the field alone.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    pub(super) fn write_to(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *slot = None,
            Self::Set(value) => *slot = Some(value),
        }
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> From<Option<Option<T>>> for FieldUpdate<T> {
    /// Maps the wire encoding of a patch field: an absent key keeps the
    /// value, an explicit null clears it, anything else replaces it.
    fn from(value: Option<Option<T>>) -> Self {
        match value {
            None => Self::Keep,
            Some(None) => Self::Clear,
            Some(Some(inner)) => Self::Set(inner),
        }
    }
}

/// Partial update for an existing task.
///
/// Fields left at their defaults keep the stored values. Title, status and
/// priority can only be replaced, never cleared; description, due date and
/// assignee take a full [`FieldUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub(super) title: Option<String>,
    pub(super) description: FieldUpdate<String>,
    pub(super) status: Option<TaskStatus>,
    pub(super) priority: Option<TaskPriority>,
    pub(super) due_date: FieldUpdate<DateTime<Utc>>,
    pub(super) assigned_to: FieldUpdate<String>,
}

impl TaskPatch {
    /// Starts an empty patch that keeps every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title with a raw value, trimmed and validated on apply.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn with_description(mut self, update: FieldUpdate<String>) -> Self {
        self.description = update;
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, update: FieldUpdate<DateTime<Utc>>) -> Self {
        self.due_date = update;
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, update: FieldUpdate<String>) -> Self {
        self.assigned_to = update;
        self
    }

    /// Returns `true` when the patch touches no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_keep()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_keep()
            && self.assigned_to.is_keep()
    }

    /// Validates every supplied field against `now` and returns the patch
    /// with the title in its normalized form.
    pub(super) fn normalized(&self, now: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        let title = self.title.as_deref().map(normalize_title).transpose()?;
        if let FieldUpdate::Set(description) = &self.description {
            validate_description(description)?;
        }
        if let FieldUpdate::Set(assigned_to) = &self.assigned_to {
            validate_assignee(assigned_to)?;
        }
        if let FieldUpdate::Set(due_date) = self.due_date {
            validate_due_date(due_date, now)?;
        }
        Ok(Self {
            title,
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            assigned_to: self.assigned_to.clone(),
        })
    }
}
