//! SQLite repository implementation for task record storage.

use super::{
    bootstrap::TaskSqlitePool,
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::tasks::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus},
    ports::{
        SortOrder, TaskListQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
        TaskSortKey,
    },
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// SQLite-backed task repository.
///
/// All diesel calls run on the blocking thread pool; each operation checks
/// out one pooled connection for its duration.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(new_task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, query: &TaskListQuery) -> TaskRepositoryResult<Vec<Task>> {
        let list_query = *query;
        self.run_blocking(move |connection| {
            let mut statement = tasks::table.select(TaskRow::as_select()).into_boxed();
            if let Some(status) = list_query.status() {
                statement = statement.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(priority) = list_query.priority() {
                statement = statement.filter(tasks::priority.eq(priority.as_str()));
            }
            if let Some(sort) = list_query.sort() {
                statement = match (sort.key, sort.order) {
                    (TaskSortKey::CreatedAt, SortOrder::Ascending) => {
                        statement.order(tasks::created_at.asc())
                    }
                    (TaskSortKey::CreatedAt, SortOrder::Descending) => {
                        statement.order(tasks::created_at.desc())
                    }
                    (TaskSortKey::UpdatedAt, SortOrder::Ascending) => {
                        statement.order(tasks::updated_at.asc())
                    }
                    (TaskSortKey::UpdatedAt, SortOrder::Descending) => {
                        statement.order(tasks::updated_at.desc())
                    }
                    (TaskSortKey::DueDate, SortOrder::Ascending) => {
                        statement.order(tasks::due_date.asc())
                    }
                    (TaskSortKey::DueDate, SortOrder::Descending) => {
                        statement.order(tasks::due_date.desc())
                    }
                };
            }
            let skip = i64::try_from(list_query.skip()).unwrap_or(i64::MAX);
            let limit = i64::try_from(list_query.limit()).unwrap_or(i64::MAX);
            let rows = statement
                .offset(skip)
                .limit(limit)
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let affected =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::priority.eq(priority.as_str()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(new_task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: new_task.title().to_owned(),
        description: new_task.description().map(str::to_owned),
        status: new_task.status().as_str().to_owned(),
        priority: new_task.priority().as_str().to_owned(),
        created_at: new_task.created_at(),
        due_date: new_task.due_date(),
        assigned_to: new_task.assigned_to().map(str::to_owned),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        updated_at: task.updated_at(),
        due_date: task.due_date(),
        assigned_to: task.assigned_to().map(str::to_owned),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
        priority: persisted_priority,
        created_at,
        updated_at,
        due_date,
        assigned_to,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        status,
        priority,
        created_at,
        updated_at,
        due_date,
        assigned_to,
    };
    Ok(Task::from_persisted(data))
}
