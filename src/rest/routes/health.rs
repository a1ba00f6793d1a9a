//! Service metadata endpoints.

use axum::Json;
use serde_json::{Value, json};

/// Reports service liveness.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Describes the API surface for interactive discovery.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "name": "gantt",
        "description": "Task management record API",
        "endpoints": {
            "POST /tasks": "Create a task",
            "GET /tasks": "List tasks with filters and pagination",
            "GET /tasks/{id}": "Fetch a task",
            "PUT /tasks/{id}": "Partially update a task",
            "DELETE /tasks/{id}": "Delete a task",
            "GET /tasks/status/{status}": "List tasks by status",
            "GET /tasks/priority/{priority}": "List tasks by priority",
            "GET /health": "Service health",
        },
    }))
}
