//! Database layer
//!
//! One SQLite table per collection:
//! - `volunteers`: volunteer posts
//! - `volunteer_requests`: applications to posts
//! - `volunteer_req_confirmations`: accepted requests (append-only)
//!
//! The pool is opened once at start-up, carried in [`crate::AppState`] and
//! closed after the server shuts down.

pub mod confirmation_repository;
pub mod request_repository;
pub mod volunteer_repository;

pub use confirmation_repository::ConfirmationRepository;
pub use request_repository::VolunteerRequestRepository;
pub use volunteer_repository::VolunteerRepository;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    Pool, Sqlite,
};
use tracing::info;
use uuid::Uuid;

use crate::config::DatabaseConfig;

/// Database connection pool type
pub type DbPool = Pool<Sqlite>;

/// Open the connection pool and run pending migrations
pub async fn init_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let connect_options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Failed to parse database URL: {}", config.url))?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.connect_timeout_secs))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    run_migrations(&pool).await?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Apply the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")
}

/// Round-trip a trivial query to prove the store is reachable
pub async fn check_health(pool: &DbPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("Database health check failed")?;
    Ok(())
}

/// Close all pooled connections, waiting for in-flight queries
pub async fn close(pool: DbPool) {
    pool.close().await;
    info!("Database pool closed");
}

/// Timestamps are stored as fixed-width RFC 3339 so `ORDER BY` on the text column
/// sorts chronologically.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_db_timestamp(ts: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S") {
        return DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc);
    }
    Utc::now()
}

pub(crate) fn parse_db_uuid(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap_or_else(|_| Uuid::nil())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let path = std::env::temp_dir().join(format!("voluntrack_unit_{}.db", Uuid::new_v4().simple()));
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 30,
        idle_timeout_secs: 600,
    };
    init_pool(&config).await.expect("Failed to initialize test database")
}
