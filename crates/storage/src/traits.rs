//! Storage collaborator consumed by the resolver and the driver.

use slugfill_core::{RecordId, Slug, SlugRecord};

use crate::error::StorageError;

/// Row access needed to backfill a slug column.
///
/// Every call is an independent blocking request; nothing is retried.
pub trait SlugStore: Send + Sync {
    /// Rows whose slug is `''` or `NULL`, soft-deleted rows included.
    fn count_rows_with_blank_slug(&self) -> Result<u64, StorageError>;

    /// Same selection as [`count_rows_with_blank_slug`](Self::count_rows_with_blank_slug),
    /// ordered by id and read in full before the caller writes anything.
    fn fetch_rows_with_blank_slug(&self) -> Result<Vec<SlugRecord>, StorageError>;

    /// Active (not soft-deleted) rows other than `exclude_id` that already use `slug`.
    fn count_active_rows_with_slug_excluding(
        &self,
        slug: &Slug,
        exclude_id: RecordId,
    ) -> Result<u64, StorageError>;

    /// Write `slug` to the row with primary key `id`.
    fn persist_slug(&self, id: RecordId, slug: &Slug) -> Result<(), StorageError>;
}
