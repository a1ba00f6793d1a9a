//! Filtering, ordering and windowing tests for the SQLite adapter.

use std::io;

use chrono::Duration;
use gantt::tasks::{
    domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::{SortOrder, TaskListQuery, TaskRepository, TaskSortKey},
};
use rstest::rstest;
use tempfile::TempDir;

use crate::sqlite::helpers::{new_task, new_task_at, prepared_repository, workspace};
use crate::test_helpers::anchor;

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}

/// Tests that status and priority filters combine in SQL.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_applies_status_and_priority_filters(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let repo = prepared_repository(&dir).expect("prepared repository");
    let drafts = [
        TaskDraft::new("Pending low").with_priority(TaskPriority::Low),
        TaskDraft::new("Completed high")
            .with_status(TaskStatus::Completed)
            .with_priority(TaskPriority::High),
        TaskDraft::new("Pending high").with_priority(TaskPriority::High),
    ];
    for draft in drafts {
        repo.insert(&new_task_at(draft, anchor()).expect("valid draft"))
            .await
            .expect("insert should succeed");
    }

    let query = TaskListQuery::new(0, 10)
        .with_status(TaskStatus::Pending)
        .with_priority(TaskPriority::High);
    let matching = repo.list(&query).await.expect("listing should succeed");

    assert_eq!(ids(&matching), vec![TaskId::new(3)]);
}

/// Tests that offset and limit window the ordered rows.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_windows_ordered_rows(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let repo = prepared_repository(&dir).expect("prepared repository");
    for (hours, title) in [(0, "First"), (1, "Second"), (2, "Third"), (3, "Fourth")] {
        let draft = TaskDraft::new(title);
        repo.insert(
            &new_task_at(draft, anchor() + Duration::hours(hours)).expect("valid draft"),
        )
        .await
        .expect("insert should succeed");
    }

    let query =
        TaskListQuery::new(1, 2).with_sort(TaskSortKey::CreatedAt, SortOrder::Ascending);
    let page = repo.list(&query).await.expect("listing should succeed");

    assert_eq!(ids(&page), vec![TaskId::new(2), TaskId::new(3)]);
}

/// Tests that rows without a due date sort first ascending and last
/// descending.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_due_date_with_null_rows_first_ascending(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let repo = prepared_repository(&dir).expect("prepared repository");
    let drafts = [
        TaskDraft::new("Late").with_due_date(anchor() + Duration::days(3)),
        TaskDraft::new("Soon").with_due_date(anchor() + Duration::days(1)),
        TaskDraft::new("Undated"),
    ];
    for draft in drafts {
        repo.insert(&new_task_at(draft, anchor()).expect("valid draft"))
            .await
            .expect("insert should succeed");
    }

    let ascending = repo
        .list(&TaskListQuery::new(0, 10).with_sort(TaskSortKey::DueDate, SortOrder::Ascending))
        .await
        .expect("listing should succeed");
    assert_eq!(
        ids(&ascending),
        vec![TaskId::new(3), TaskId::new(2), TaskId::new(1)]
    );

    let descending = repo
        .list(&TaskListQuery::new(0, 10).with_sort(TaskSortKey::DueDate, SortOrder::Descending))
        .await
        .expect("listing should succeed");
    assert_eq!(
        ids(&descending),
        vec![TaskId::new(1), TaskId::new(2), TaskId::new(3)]
    );
}

/// Tests that creation-time ordering follows the stored timestamps.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_creation_time_descending(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let repo = prepared_repository(&dir).expect("prepared repository");
    for (hours, title) in [(0, "First"), (1, "Second"), (2, "Third")] {
        let draft = TaskDraft::new(title);
        repo.insert(
            &new_task_at(draft, anchor() + Duration::hours(hours)).expect("valid draft"),
        )
        .await
        .expect("insert should succeed");
    }

    let newest_first = repo
        .list(&TaskListQuery::new(0, 10).with_sort(TaskSortKey::CreatedAt, SortOrder::Descending))
        .await
        .expect("listing should succeed");

    assert_eq!(
        ids(&newest_first),
        vec![TaskId::new(3), TaskId::new(2), TaskId::new(1)]
    );
}

/// Tests that the status lookup returns matching rows in id order.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_status_returns_matching_rows(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let repo = prepared_repository(&dir).expect("prepared repository");
    let drafts = [
        TaskDraft::new("Cancelled early").with_status(TaskStatus::Cancelled),
        TaskDraft::new("Open"),
        TaskDraft::new("Cancelled late").with_status(TaskStatus::Cancelled),
    ];
    for draft in drafts {
        repo.insert(&new_task_at(draft, anchor()).expect("valid draft"))
            .await
            .expect("insert should succeed");
    }

    let cancelled = repo
        .find_by_status(TaskStatus::Cancelled)
        .await
        .expect("status lookup should succeed");

    assert_eq!(ids(&cancelled), vec![TaskId::new(1), TaskId::new(3)]);
}

/// Tests that the priority lookup returns matching rows in id order.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_priority_returns_matching_rows(workspace: io::Result<TempDir>) {
    let dir = workspace.expect("temp dir");
    let repo = prepared_repository(&dir).expect("prepared repository");
    repo.insert(&new_task("Routine").expect("valid draft"))
        .await
        .expect("insert should succeed");
    repo.insert(
        &new_task_at(TaskDraft::new("Hot").with_priority(TaskPriority::Urgent), anchor())
            .expect("valid draft"),
    )
    .await
    .expect("insert should succeed");

    let urgent = repo
        .find_by_priority(TaskPriority::Urgent)
        .await
        .expect("priority lookup should succeed");

    assert_eq!(ids(&urgent), vec![TaskId::new(2)]);
}
