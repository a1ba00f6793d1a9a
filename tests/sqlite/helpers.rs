//! Shared test helpers for SQLite repository integration tests.

use std::io;

use chrono::{DateTime, Utc};
use gantt::tasks::{
    adapters::sqlite::{SqliteTaskRepository, TaskSqlitePool, build_pool, ensure_schema},
    domain::{NewTask, TaskDomainError, TaskDraft},
};
use rstest::fixture;
use tempfile::TempDir;

use crate::test_helpers::{FixedClock, anchor};

/// Boxed error type for fallible test helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Provides a scratch directory holding the database file for one test.
#[fixture]
pub fn workspace() -> io::Result<TempDir> {
    tempfile::tempdir()
}

/// Path of the database file inside the workspace.
#[must_use]
pub fn database_url(workspace: &TempDir) -> String {
    workspace
        .path()
        .join("tasks.db")
        .to_string_lossy()
        .into_owned()
}

/// Builds a pooled connection to the workspace database and applies the
/// schema.
///
/// # Errors
///
/// Returns an error when the pool cannot be built or the DDL fails.
pub fn prepared_pool(workspace: &TempDir) -> Result<TaskSqlitePool, BoxError> {
    let pool = build_pool(&database_url(workspace))?;
    ensure_schema(&pool)?;
    Ok(pool)
}

/// Builds a repository over a freshly bootstrapped workspace database.
///
/// # Errors
///
/// Returns an error when the pool cannot be built or the DDL fails.
pub fn prepared_repository(workspace: &TempDir) -> Result<SqliteTaskRepository, BoxError> {
    Ok(SqliteTaskRepository::new(prepared_pool(workspace)?))
}

/// Builds a validated new-task record with the given title.
///
/// # Errors
///
/// Returns an error when the title fails validation.
pub fn new_task(title: &str) -> Result<NewTask, TaskDomainError> {
    TaskDraft::new(title).validate(&FixedClock::new(anchor()))
}

/// Builds a validated new-task record from a fully populated draft at the
/// given instant.
///
/// # Errors
///
/// Returns an error when a field fails validation.
pub fn new_task_at(draft: TaskDraft, instant: DateTime<Utc>) -> Result<NewTask, TaskDomainError> {
    draft.validate(&FixedClock::new(instant))
}
