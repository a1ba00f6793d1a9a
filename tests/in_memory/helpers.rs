//! Shared test helpers for in-memory repository integration tests.

use gantt::tasks::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskDomainError, TaskDraft},
};
use rstest::fixture;

use crate::test_helpers::{FixedClock, anchor};

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a validated new-task record with the given title.
///
/// # Errors
///
/// Returns an error when the title fails validation.
pub fn new_task(title: &str) -> Result<NewTask, TaskDomainError> {
    TaskDraft::new(title).validate(&FixedClock::new(anchor()))
}

/// Builds a validated new-task record from a fully populated draft.
///
/// # Errors
///
/// Returns an error when a field fails validation.
pub fn new_task_from(draft: TaskDraft) -> Result<NewTask, TaskDomainError> {
    draft.validate(&FixedClock::new(anchor()))
}
