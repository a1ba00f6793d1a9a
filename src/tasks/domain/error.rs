//! Error types for task field validation and enumeration parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while validating or normalizing task fields.
///
/// Each variant corresponds to exactly one offending field, reported by
/// [`TaskDomainError::field`] so transport layers can surface which input
/// was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming surrounding whitespace.
    #[error("title must not be empty or whitespace")]
    EmptyTitle,

    /// The trimmed title exceeds the maximum length.
    #[error("title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The description exceeds the maximum length.
    #[error("description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The assignee exceeds the maximum length.
    #[error("assigned_to must be at most {max} characters, got {actual}")]
    AssigneeTooLong {
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The due date is not strictly in the future.
    #[error("due date {0} must be in the future")]
    DueDateNotInFuture(DateTime<Utc>),

    /// The status value is not a member of the closed status set.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    /// The priority value is not a member of the closed priority set.
    #[error("unknown task priority: {0}")]
    UnknownPriority(String),

    /// The sort key is not one of the sortable columns.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// The sort order is neither `asc` nor `desc`.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}

impl TaskDomainError {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::DescriptionTooLong { .. } => "description",
            Self::AssigneeTooLong { .. } => "assigned_to",
            Self::DueDateNotInFuture(_) => "due_date",
            Self::UnknownStatus(_) => "status",
            Self::UnknownPriority(_) => "priority",
            Self::UnknownSortKey(_) => "sort_by",
            Self::UnknownSortOrder(_) => "sort_order",
        }
    }
}
