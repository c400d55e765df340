//! In-memory `SlugStore` for resolver and driver tests.

#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use slugfill_core::{RecordId, Slug, SlugRecord};
use slugfill_storage::{SlugStore, StorageError};

#[derive(Debug, Clone)]
pub struct Row {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub deleted: bool,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Row>>,
    count_queries: AtomicUsize,
    persists: AtomicUsize,
    fail_counts: AtomicBool,
    fail_persist_for: Mutex<Option<i64>>,
}

fn failure() -> StorageError {
    StorageError::Database(rusqlite::Error::InvalidQuery)
}

fn is_blank(slug: Option<&String>) -> bool {
    slug.is_none_or(String::is_empty)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, id: i64, title: &str, slug: Option<&str>, deleted: bool) {
        self.rows.lock().unwrap().push(Row {
            id,
            title: title.to_owned(),
            slug: slug.map(str::to_owned),
            deleted,
        });
    }

    pub fn insert(&self, id: i64, title: &str, slug: Option<&str>) {
        self.push(id, title, slug, false);
    }

    pub fn insert_deleted(&self, id: i64, title: &str, slug: Option<&str>) {
        self.push(id, title, slug, true);
    }

    pub fn slug_of(&self, id: i64) -> Option<String> {
        self.rows.lock().unwrap().iter().find(|r| r.id == id).and_then(|r| r.slug.clone())
    }

    pub fn rows(&self) -> Vec<Row> {
        self.rows.lock().unwrap().clone()
    }

    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }

    pub fn persists(&self) -> usize {
        self.persists.load(Ordering::SeqCst)
    }

    pub fn fail_counts(&self) {
        self.fail_counts.store(true, Ordering::SeqCst);
    }

    pub fn fail_persist_for(&self, id: i64) {
        *self.fail_persist_for.lock().unwrap() = Some(id);
    }
}

impl SlugStore for MemoryStore {
    fn count_rows_with_blank_slug(&self) -> Result<u64, StorageError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|r| is_blank(r.slug.as_ref())).count() as u64)
    }

    fn fetch_rows_with_blank_slug(&self) -> Result<Vec<SlugRecord>, StorageError> {
        let mut rows: Vec<SlugRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| is_blank(r.slug.as_ref()))
            .map(|r| SlugRecord::new(RecordId(r.id), r.title.clone(), r.slug.clone()))
            .collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows)
    }

    fn count_active_rows_with_slug_excluding(
        &self,
        slug: &Slug,
        exclude_id: RecordId,
    ) -> Result<u64, StorageError> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(failure());
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| {
                !r.deleted && r.id != exclude_id.0 && r.slug.as_deref() == Some(slug.as_str())
            })
            .count() as u64)
    }

    fn persist_slug(&self, id: RecordId, slug: &Slug) -> Result<(), StorageError> {
        if *self.fail_persist_for.lock().unwrap() == Some(id.0) {
            return Err(failure());
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id.0)
            .ok_or_else(|| StorageError::NotFound { entity: "record", id: id.to_string() })?;
        row.slug = Some(slug.as_str().to_owned());
        self.persists.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
