//! Handlers for the task record endpoints.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;

use crate::rest::AppState;
use crate::rest::dto::{CreateTaskBody, ListTasksParams, TaskResponse, UpdateTaskBody};
use crate::rest::error::ApiError;
use crate::tasks::domain::{TaskId, TaskPriority, TaskStatus};
use crate::tasks::ports::TaskRepository;

/// Creates a task from the request body and returns it with status 201.
///
/// # Errors
/// Returns 422 when a field fails validation, 400/415/422 when the body
/// cannot be parsed, and 500 when storage fails.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let task = state.into_service().create(body.into_draft()).await?;
    tracing::info!(id = %task.id(), "task created");
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// Lists tasks with optional filters, ordering and pagination window.
///
/// # Errors
/// Returns 422 when a filter or sort parameter is outside its closed value
/// set, 400 when a parameter cannot be parsed, and 500 when storage fails.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(raw) = params?;
    let query = raw.into_query()?;
    let tasks = state.into_service().list(&query).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// Fetches a single task by identifier.
///
/// # Errors
/// Returns 404 when no task has the identifier and 500 when storage fails.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state.into_service().get(TaskId::new(id)).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// Applies a partial update to a task and returns the updated record.
///
/// # Errors
/// Returns 404 when no task has the identifier, 422 when a supplied field
/// fails validation, 400/415/422 when the body cannot be parsed, and 500
/// when storage fails.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let patch = body.into_patch();
    let task = state
        .into_service()
        .update(TaskId::new(id), &patch)
        .await?;
    tracing::info!(id = %task.id(), "task updated");
    Ok(Json(TaskResponse::from(&task)))
}

/// Deletes a task by identifier, returning status 204 on success.
///
/// # Errors
/// Returns 404 when no task has the identifier and 500 when storage fails.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.into_service().delete(TaskId::new(id)).await?;
    tracing::info!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Lists every task with the given status in natural order.
///
/// # Errors
/// Returns 422 when the status is outside the closed set and 500 when
/// storage fails.
pub async fn tasks_by_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_status): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let status = TaskStatus::try_from(raw_status.as_str())?;
    let tasks = state.into_service().find_by_status(status).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// Lists every task with the given priority in natural order.
///
/// # Errors
/// Returns 422 when the priority is outside the closed set and 500 when
/// storage fails.
pub async fn tasks_by_priority<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_priority): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let priority = TaskPriority::try_from(raw_priority.as_str())?;
    let tasks = state.into_service().find_by_priority(priority).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}
