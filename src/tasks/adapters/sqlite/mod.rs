//! SQLite adapters for task record persistence.

mod bootstrap;
mod models;
mod repository;
mod schema;

pub use bootstrap::{TaskSqlitePool, build_pool, ensure_schema};
pub use repository::SqliteTaskRepository;
