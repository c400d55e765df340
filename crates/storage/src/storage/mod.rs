//! `SQLite` storage implementation
//!
//! All methods are synchronous; each call takes its own pooled connection and
//! commits on its own.

// SQLite uses i64 for counts, Rust uses usize/u64 - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust u64/usize conversions are safe within DB row counts"
)]

mod runs;
mod schema;
mod slugs;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use slugfill_core::TableConfig;
use slugfill_core::constants::{DEFAULT_DB_POOL_SIZE, ENV_DB_POOL_SIZE};
use slugfill_core::env_config::env_parse_with_default;
use std::path::Path;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool and the table under repair
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
    pub(crate) table: TableConfig,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(StorageError::from)
}

/// Parse JSON from string, converting error to rusqlite error
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(s: &str) -> rusqlite::Result<T> {
    serde_json::from_str(s).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Double-quote an identifier that already passed `TableConfig` validation.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{name}\"")
}

/// Concurrency settings applied to every pooled connection
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default(ENV_DB_POOL_SIZE, DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open the database at `db_path` and run the bookkeeping migrations.
    ///
    /// The table described by `table` is not touched here; see
    /// [`Storage::check_prerequisites`].
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or a migration fails.
    pub fn new(db_path: &Path, table: TableConfig) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(
            pool_size = pool_size,
            table = table.table(),
            slug_column = table.slug_column(),
            "Storage initialized with connection pool"
        );

        Ok(Self { pool, table })
    }

    #[must_use]
    pub fn table_config(&self) -> &TableConfig {
        &self.table
    }
}
