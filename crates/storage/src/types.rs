//! Rows of the run-history table.

use chrono::{DateTime, Utc};
use serde::Serialize;
use slugfill_core::RecordId;

/// One recorded backfill run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    pub id: i64,
    pub identifier: String,
    pub policy: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub scanned: u64,
    pub updated: u64,
    pub skipped: u64,
    pub suffixed: u64,
    pub exhausted: Vec<RecordId>,
}
