//! Task API server binary.
//!
//! Boots the SQLite-backed task repository, ensures the schema exists and
//! serves the REST surface until terminated.

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use gantt::rest::{AppState, serve};
use gantt::tasks::adapters::sqlite::{SqliteTaskRepository, build_pool, ensure_schema};
use gantt::tasks::services::TaskLifecycleService;

/// Command-line configuration for the task API server.
#[derive(Debug, Parser)]
#[command(name = "ganttd", about = "Task management record API server", version)]
struct Args {
    /// Socket address to serve on.
    #[arg(long, env = "GANTT_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// SQLite database path, created on first run.
    #[arg(long, env = "GANTT_DATABASE", default_value = "tasks.db")]
    database: String,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "GANTT_LOG_JSON")]
    json_logs: bool,
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    let pool = build_pool(&args.database)
        .wrap_err_with(|| format!("failed to open database at {}", args.database))?;
    ensure_schema(&pool).wrap_err("failed to bootstrap the task schema")?;

    let repository = Arc::new(SqliteTaskRepository::new(pool));
    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));
    let state = AppState::new(service);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", args.bind))?;
    tracing::info!(address = %args.bind, database = %args.database, "task API listening");
    serve(listener, state).await?;
    Ok(())
}
