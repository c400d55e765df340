//! Test utilities and module declarations for storage tests.

use crate::Storage;
use crate::storage::get_conn;
use rusqlite::params;
use slugfill_core::TableConfig;
use tempfile::TempDir;

pub const CREATE_GLOSSARY_SQL: &str = "
CREATE TABLE tx_glossary2_domain_model_glossary (
    uid INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    path_segment TEXT DEFAULT '',
    deleted INTEGER NOT NULL DEFAULT 0
);
";

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path, TableConfig::default()).unwrap();
    get_conn(&storage.pool).unwrap().execute_batch(CREATE_GLOSSARY_SQL).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_record(
    storage: &Storage,
    uid: i64,
    title: Option<&str>,
    slug: Option<&str>,
    deleted: bool,
) {
    get_conn(&storage.pool)
        .unwrap()
        .execute(
            "INSERT INTO tx_glossary2_domain_model_glossary (uid, title, path_segment, deleted)
             VALUES (?1, ?2, ?3, ?4)",
            params![uid, title, slug, i64::from(deleted)],
        )
        .unwrap();
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn read_slug(storage: &Storage, uid: i64) -> Option<String> {
    get_conn(&storage.pool)
        .unwrap()
        .query_row(
            "SELECT path_segment FROM tx_glossary2_domain_model_glossary WHERE uid = ?1",
            params![uid],
            |row| row.get(0),
        )
        .unwrap()
}

mod schema_tests;
