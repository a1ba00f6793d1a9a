//! SQLite pool construction and schema bootstrap.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;

use crate::tasks::ports::{TaskRepositoryError, TaskRepositoryResult};

/// SQLite connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// DDL executed at startup. Every statement is idempotent so bootstrap can
/// run on every launch against an existing database file.
const BOOTSTRAP_SQL: &str = "\
    CREATE TABLE IF NOT EXISTS tasks (\
        id INTEGER PRIMARY KEY AUTOINCREMENT,\
        title TEXT NOT NULL,\
        description TEXT,\
        status TEXT NOT NULL,\
        priority TEXT NOT NULL,\
        created_at TEXT NOT NULL,\
        updated_at TEXT,\
        due_date TEXT,\
        assigned_to TEXT\
    );\
    CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks (status);\
    CREATE INDEX IF NOT EXISTS idx_tasks_priority ON tasks (priority);";

/// Session pragmas applied to every pooled connection. WAL keeps readers
/// unblocked by the single writer and the busy timeout covers write
/// contention between pooled connections.
const SESSION_PRAGMAS: &str = "\
    PRAGMA journal_mode = WAL;\
    PRAGMA synchronous = NORMAL;\
    PRAGMA busy_timeout = 5000;\
    PRAGMA foreign_keys = ON;";

#[derive(Debug, Clone, Copy)]
struct SessionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SessionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(SESSION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the given SQLite database path.
///
/// The file is created on first connection when it does not exist yet.
///
/// # Errors
/// Returns the pool error when the initial connection cannot be
/// established.
pub fn build_pool(database_url: &str) -> Result<TaskSqlitePool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SessionPragmas))
        .build(manager)
}

/// Creates the task table and its indexes when they do not exist yet.
///
/// # Errors
/// Returns [`TaskRepositoryError::Persistence`] when a connection cannot
/// be checked out or the DDL fails.
pub fn ensure_schema(pool: &TaskSqlitePool) -> TaskRepositoryResult<()> {
    let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
    connection
        .batch_execute(BOOTSTRAP_SQL)
        .map_err(TaskRepositoryError::persistence)
}
