use chrono::{DateTime, Utc};
use rusqlite::params;
use slugfill_core::{BackfillReport, ExhaustionPolicy};

use super::{Storage, get_conn, parse_json};
use crate::error::StorageError;
use crate::types::RunRecord;

const RUN_COLUMNS: &str = "id, identifier, policy, started_at, finished_at, scanned, updated, \
                           skipped, suffixed, exhausted";

fn parse_time(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

impl Storage {
    /// Save the outcome of a run. Returns the history row id.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn record_run(
        &self,
        identifier: &str,
        policy: ExhaustionPolicy,
        report: &BackfillReport,
    ) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO slugfill_runs
               (identifier, policy, started_at, finished_at, scanned, updated, skipped, suffixed, exhausted)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                identifier,
                policy.as_str(),
                report.started_at.to_rfc3339(),
                report.finished_at.map(|d| d.to_rfc3339()),
                report.scanned as i64,
                report.updated as i64,
                report.skipped() as i64,
                report.suffixed as i64,
                serde_json::to_string(&report.exhausted)?,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Most recent runs first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_runs(&self, limit: usize) -> Result<Vec<RunRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RUN_COLUMNS} FROM slugfill_runs ORDER BY id DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit as i64], Self::row_to_run)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Latest run recorded under `identifier`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn last_run(&self, identifier: &str) -> Result<Option<RunRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RUN_COLUMNS} FROM slugfill_runs WHERE identifier = ?1 ORDER BY id DESC LIMIT 1"
        ))?;
        let mut rows = stmt.query(params![identifier])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::row_to_run(row)?))
        } else {
            Ok(None)
        }
    }

    fn row_to_run(row: &rusqlite::Row<'_>) -> rusqlite::Result<RunRecord> {
        let finished_at: Option<String> = row.get(4)?;
        Ok(RunRecord {
            id: row.get(0)?,
            identifier: row.get(1)?,
            policy: row.get(2)?,
            started_at: parse_time(&row.get::<_, String>(3)?)?,
            finished_at: finished_at.as_deref().map(parse_time).transpose()?,
            scanned: row.get::<_, i64>(5)? as u64,
            updated: row.get::<_, i64>(6)? as u64,
            skipped: row.get::<_, i64>(7)? as u64,
            suffixed: row.get::<_, i64>(8)? as u64,
            exhausted: parse_json(&row.get::<_, String>(9)?)?,
        })
    }
}
