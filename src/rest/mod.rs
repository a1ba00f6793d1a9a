//! HTTP surface for the task API.
//!
//! Routes, wire formats and error mapping for the REST endpoints:
//!
//! - `POST /tasks`, `GET /tasks`
//! - `GET`/`PUT`/`DELETE /tasks/{id}`
//! - `GET /tasks/status/{status}`, `GET /tasks/priority/{priority}`
//! - `GET /health`, `GET /`
//!
//! The router is generic over the repository and clock carried by
//! [`AppState`], so tests can drive the full HTTP stack against the
//! in-memory adapter with a pinned clock.

pub mod dto;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use mockable::Clock;
use tokio::net::TcpListener;

use crate::tasks::ports::TaskRepository;
use crate::tasks::services::TaskLifecycleService;

/// Shared dependencies handed to every handler.
///
/// Cloned per request by the state extractor; the service only holds
/// shared handles, so cloning is cheap.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, C>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps the service for router construction.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, C>) -> Self {
        Self { service }
    }

    /// Unwraps the request-scoped copy of the service.
    #[must_use]
    pub fn into_service(self) -> TaskLifecycleService<R, C> {
        self.service
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// Builds the task API router on top of the given state.
#[must_use]
pub fn build_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(routes::health::api_index))
        .route("/health", get(routes::health::health))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/tasks/status/{status}", get(routes::tasks::tasks_by_status))
        .route(
            "/tasks/priority/{priority}",
            get(routes::tasks::tasks_by_priority),
        )
        .with_state(state)
}

/// Serves the task API on the listener until the server fails.
///
/// # Errors
///
/// Returns the underlying I/O error when accepting connections fails.
pub async fn serve<R, C>(listener: TcpListener, state: AppState<R, C>) -> std::io::Result<()>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    axum::serve(listener, build_router(state)).await
}
