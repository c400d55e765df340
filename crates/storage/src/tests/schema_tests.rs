use super::create_test_storage;
use crate::migrations::column_helpers::column_exists;
use crate::storage::get_conn;
use crate::{Storage, StorageError};
use slugfill_core::TableConfig;
use tempfile::TempDir;

#[test]
fn test_prerequisites_pass_on_complete_table() {
    let (storage, _temp_dir) = create_test_storage();
    storage.check_prerequisites().unwrap();
}

#[test]
fn test_prerequisites_report_missing_table() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("t.db"), TableConfig::default()).unwrap();

    let err = storage.check_prerequisites().unwrap_err();
    assert!(matches!(err, StorageError::MissingTable(ref t) if t == "tx_glossary2_domain_model_glossary"));
}

#[test]
fn test_prerequisites_add_slug_column() {
    let temp_dir = TempDir::new().unwrap();
    let config = TableConfig::validated("posts", "id", "headline", "slug", "hidden").unwrap();
    let storage = Storage::new(&temp_dir.path().join("t.db"), config).unwrap();
    get_conn(&storage.pool)
        .unwrap()
        .execute_batch(
            "CREATE TABLE posts (id INTEGER PRIMARY KEY, headline TEXT, hidden INTEGER DEFAULT 0);
             INSERT INTO posts (id, headline) VALUES (1, 'First');",
        )
        .unwrap();

    storage.check_prerequisites().unwrap();

    let conn = get_conn(&storage.pool).unwrap();
    assert!(column_exists(&conn, "posts", "slug").unwrap());
    drop(conn);
    assert_eq!(crate::SlugStore::count_rows_with_blank_slug(&storage).unwrap(), 1);

    // Second call is a no-op.
    storage.check_prerequisites().unwrap();
}

#[test]
fn test_prerequisites_report_missing_title_column() {
    let temp_dir = TempDir::new().unwrap();
    let config = TableConfig::validated("posts", "id", "headline", "slug", "deleted").unwrap();
    let storage = Storage::new(&temp_dir.path().join("t.db"), config).unwrap();
    get_conn(&storage.pool)
        .unwrap()
        .execute_batch("CREATE TABLE posts (id INTEGER PRIMARY KEY, slug TEXT, deleted INTEGER);")
        .unwrap();

    let err = storage.check_prerequisites().unwrap_err();
    assert!(matches!(err, StorageError::MissingColumn { ref column, .. } if column == "headline"));
}

#[test]
fn test_migrations_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("t.db");
    drop(Storage::new(&db_path, TableConfig::default()).unwrap());
    let storage = Storage::new(&db_path, TableConfig::default()).unwrap();

    let conn = get_conn(&storage.pool).unwrap();
    let versions: i64 =
        conn.query_row("SELECT COUNT(*) FROM slugfill_meta", [], |row| row.get(0)).unwrap();
    assert_eq!(versions, 1);
    assert!(column_exists(&conn, "slugfill_runs", "policy").unwrap());
}

#[test]
fn test_verify_prerequisites_leaves_schema_alone() {
    let temp_dir = TempDir::new().unwrap();
    let config = TableConfig::validated("posts", "id", "headline", "slug", "deleted").unwrap();
    let storage = Storage::new(&temp_dir.path().join("t.db"), config).unwrap();
    get_conn(&storage.pool)
        .unwrap()
        .execute_batch("CREATE TABLE posts (id INTEGER PRIMARY KEY, headline TEXT, deleted INTEGER);")
        .unwrap();

    assert!(!storage.verify_prerequisites().unwrap());
    let conn = get_conn(&storage.pool).unwrap();
    assert!(!column_exists(&conn, "posts", "slug").unwrap());
    drop(conn);

    storage.check_prerequisites().unwrap();
    assert!(storage.verify_prerequisites().unwrap());
}
