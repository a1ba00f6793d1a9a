//! Bootstrap and persistence tests for the SQLite adapter.

use std::io;

use gantt::tasks::{
    adapters::sqlite::{SqliteTaskRepository, ensure_schema},
    ports::TaskRepository,
};
use rstest::rstest;
use tempfile::TempDir;

use crate::sqlite::helpers::{new_task, prepared_pool, workspace};

/// Tests that schema bootstrap can run repeatedly against the same file.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bootstrap_is_idempotent(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let pool = prepared_pool(&dir).expect("prepared pool");
    ensure_schema(&pool).expect("second bootstrap should succeed");

    let repo = SqliteTaskRepository::new(pool);
    let task = repo
        .insert(&new_task("After rebootstrap").expect("valid draft"))
        .await
        .expect("insert should succeed");

    assert_eq!(task.title(), "After rebootstrap");
}

/// Tests that records survive closing and reopening the database file.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_survive_pool_reopen(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let created = {
        let repo = SqliteTaskRepository::new(prepared_pool(&dir).expect("prepared pool"));
        repo.insert(&new_task("Durable").expect("valid draft"))
            .await
            .expect("insert should succeed")
    };

    let reopened = SqliteTaskRepository::new(prepared_pool(&dir).expect("prepared pool"));
    let found = reopened
        .find_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(found, Some(created));
}
