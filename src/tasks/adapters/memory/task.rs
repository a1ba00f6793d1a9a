//! In-memory repository for task records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::tasks::{
    domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus},
    ports::{
        SortOrder, TaskListQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
        TaskSort, TaskSortKey,
    },
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a monotonic counter starting at one and
/// never reused. Iterating the id-keyed map yields insertion order, which
/// is the natural order of unsorted listings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

const fn sort_timestamp(task: &Task, key: TaskSortKey) -> Option<DateTime<Utc>> {
    match key {
        TaskSortKey::CreatedAt => Some(task.created_at()),
        TaskSortKey::UpdatedAt => task.updated_at(),
        TaskSortKey::DueDate => task.due_date(),
    }
}

/// Compares two tasks by a sort column, placing records without a value
/// first ascending and last descending.
fn compare_tasks(a: &Task, b: &Task, sort: TaskSort) -> Ordering {
    let ordering = match (sort_timestamp(a, sort.key), sort_timestamp(b, sort.key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.cmp(&right),
    };
    match sort.order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

fn apply_window(tasks: Vec<Task>, skip: u64, limit: u64) -> Vec<Task> {
    let start = usize::try_from(skip).unwrap_or(usize::MAX);
    let count = usize::try_from(limit).unwrap_or(usize::MAX);
    tasks.into_iter().skip(start).take(count).collect()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let id = TaskId::new(state.next_id);
        state.next_id = state.next_id.saturating_add(1);
        let task = new_task.clone().into_task(id);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, query: &TaskListQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| query.status().is_none_or(|status| task.status() == status))
            .filter(|task| {
                query
                    .priority()
                    .is_none_or(|priority| task.priority() == priority)
            })
            .cloned()
            .collect();
        if let Some(sort) = query.sort() {
            tasks.sort_by(|a, b| compare_tasks(a, b, sort));
        }
        Ok(apply_window(tasks, query.skip(), query.limit()))
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.priority() == priority)
            .cloned()
            .collect())
    }
}
