//! # Record store
//!
//! SQLite persistence for users, internship postings and applications, reached
//! through a shared `sqlx::SqlitePool`.
//!
//! The database runs in WAL mode with a busy timeout, so concurrent writers
//! queue on SQLite's single writer lock instead of failing. Every multi-statement
//! mutation (the apply flow in [`applications`]) runs inside an explicit
//! transaction whose first statement is a write.
//!
//! - [`schema`]: idempotent DDL executed at startup
//! - [`postings`]: `PostingRepository` implementation
//! - [`applications`]: `ApplicationRepository` implementation
//! - [`users`]: `UserRepository` implementation

mod applications;
mod postings;
pub mod schema;
mod users;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tracing::{debug, info};

use crate::config::DatabaseConfig;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Error enumeration shared by every repository implementation.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("no slots remaining")]
    Exhausted,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(value: sqlx::Error) -> Self {
        match &value {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict,
            sqlx::Error::RowNotFound => Self::NotFound,
            _ => Self::Unavailable(value.to_string()),
        }
    }
}

/// Handle to the SQLite database backing every repository trait in the crate.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a pool against the configured database, creating the file if needed.
    ///
    /// In-memory databases are private to a connection, so they are pinned to a
    /// single connection that is never recycled.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let in_memory = is_in_memory(&config.url);

        let mut options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(url = %config.url, in_memory, "sqlite pool opened");
        Ok(Self { pool })
    }

    /// Connect and make sure every table exists.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let store = Self::connect(config).await?;
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the users, internships and applications tables if absent.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        for statement in schema::STATEMENTS {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("database schema ready");
        Ok(())
    }

    /// Execute `SELECT 1` to verify the database still answers.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
