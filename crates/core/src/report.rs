//! Summary of one backfill run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// Counters collected while the driver walks the blank-slug rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillReport {
    /// Rows returned by the blank-slug scan.
    pub scanned: usize,
    /// Rows that received a slug.
    pub updated: usize,
    pub skipped_blank_title: usize,
    /// Rows whose title sanitized to nothing.
    pub skipped_unsanitizable: usize,
    /// Rows that needed a numeric suffix.
    pub suffixed: usize,
    /// Rows that got `candidate-100` while it still collided.
    pub exhausted: Vec<RecordId>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl BackfillReport {
    #[must_use]
    pub fn start() -> Self {
        Self {
            scanned: 0,
            updated: 0,
            skipped_blank_title: 0,
            skipped_unsanitizable: 0,
            suffixed: 0,
            exhausted: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// No row was left with a known duplicate.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.exhausted.is_empty()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped_blank_title.saturating_add(self.skipped_unsanitizable)
    }
}
