//! Port contracts for task record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod query;
pub mod repository;

pub use query::{SortOrder, TaskListQuery, TaskSort, TaskSortKey};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
