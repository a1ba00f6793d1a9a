//! Domain model for task records.
//!
//! The domain owns the validation rules for task fields, the closed status
//! and priority sets, and the patch semantics for partial updates, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use fields::{
    ASSIGNEE_MAX_CHARS, DESCRIPTION_MAX_CHARS, FieldUpdate, NewTask, TITLE_MAX_CHARS, TaskDraft,
    TaskPatch,
};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskPriority, TaskStatus};
