//! Listing query contract shared by every repository implementation.

use crate::tasks::domain::{TaskDomainError, TaskPriority, TaskStatus};
use std::fmt;

/// Columns a task listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    /// Creation timestamp, never null.
    CreatedAt,
    /// Last-update timestamp, null until the first update.
    UpdatedAt,
    /// Due date, null when the task has none.
    DueDate,
}

impl TaskSortKey {
    /// Canonical string form matching the column name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::DueDate => "due_date",
        }
    }
}

impl fmt::Display for TaskSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskSortKey {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "due_date" => Ok(Self::DueDate),
            other => Err(TaskDomainError::UnknownSortKey(other.to_owned())),
        }
    }
}

/// Direction of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first; records without a value sort before any value.
    #[default]
    Ascending,
    /// Largest first; records without a value sort after any value.
    Descending,
}

impl SortOrder {
    /// Canonical string form used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(TaskDomainError::UnknownSortOrder(other.to_owned())),
        }
    }
}

/// Explicit ordering applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSort {
    /// Column to sort by.
    pub key: TaskSortKey,
    /// Direction to sort in.
    pub order: SortOrder,
}

/// Filters, ordering and pagination window for listing tasks.
///
/// Without an explicit sort, results come back in natural order, the order
/// records were inserted in. The window is applied after filtering and
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListQuery {
    skip: u64,
    limit: u64,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    sort: Option<TaskSort>,
}

impl TaskListQuery {
    /// Builds a query with the given window, no filters and natural order.
    #[must_use]
    pub const fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit,
            status: None,
            priority: None,
            sort: None,
        }
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Orders results by the given key and direction.
    #[must_use]
    pub const fn with_sort(mut self, key: TaskSortKey, order: SortOrder) -> Self {
        self.sort = Some(TaskSort { key, order });
        self
    }

    /// Number of matching records to drop from the front.
    #[must_use]
    pub const fn skip(&self) -> u64 {
        self.skip
    }

    /// Maximum number of records to return.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Priority filter, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Explicit ordering, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<TaskSort> {
        self.sort
    }
}
