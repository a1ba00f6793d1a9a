//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Storage-assigned row identifier.
    pub id: i64,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Urgency level in canonical string form.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, null until the first update.
    pub updated_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
}

/// Insert model for task records; the identifier comes from the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Urgency level in canonical string form.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
}

/// Full-row update model for task records.
///
/// `treat_none_as_null` makes every `None` write SQL NULL, so cleared
/// optional fields land in storage. The identifier and creation timestamp
/// are deliberately absent and therefore immutable.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Urgency level in canonical string form.
    pub priority: String,
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee.
    pub assigned_to: Option<String>,
}
