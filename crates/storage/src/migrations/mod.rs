#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

pub(crate) mod column_helpers;
mod v1;
mod v2;

use chrono::Utc;
use column_helpers::add_column_if_not_exists;
use rusqlite::{Connection, params};

/// Version of the bookkeeping tables owned by slugfill.
///
/// Tracked in `slugfill_meta` rather than `PRAGMA user_version`, which belongs
/// to the host database.
pub const SCHEMA_VERSION: i32 = 2;

const META_SQL: &str = "
CREATE TABLE IF NOT EXISTS slugfill_meta (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
";

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(META_SQL)?;

    let current_version: i32 =
        conn.query_row("SELECT COALESCE(MAX(version), 0) FROM slugfill_meta", [], |row| {
            row.get(0)
        })?;

    tracing::info!("slugfill schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: slugfill_runs table");
        conn.execute_batch(v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: policy column and identifier index on slugfill_runs");
        add_column_if_not_exists(conn, "slugfill_runs", v2::SQL_POLICY, v2::SQL_POLICY_DEF)?;
        conn.execute_batch(v2::INDEX_SQL)?;
    }

    if current_version < SCHEMA_VERSION {
        conn.execute(
            "INSERT OR REPLACE INTO slugfill_meta (version, applied_at) VALUES (?1, ?2)",
            params![SCHEMA_VERSION, Utc::now().to_rfc3339()],
        )?;
    }
    tracing::info!("slugfill schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
