use rusqlite::params;
use rusqlite::types::Value;
use slugfill_core::{RecordId, Slug, SlugRecord};

use super::{Storage, get_conn, quote_ident};
use crate::error::StorageError;
use crate::traits::SlugStore;

impl Storage {
    /// `WHERE` clause selecting rows whose slug is blank.
    fn blank_slug_filter(&self) -> String {
        let slug = quote_ident(self.table.slug_column());
        format!("({slug} = '' OR {slug} IS NULL)")
    }
}

/// Titles are text in spirit but SQLite may hand back any storage class.
fn title_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(n) => n.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s,
        Value::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

impl SlugStore for Storage {
    fn count_rows_with_blank_slug(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {}",
            quote_ident(self.table.table()),
            self.blank_slug_filter()
        );
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn fetch_rows_with_blank_slug(&self) -> Result<Vec<SlugRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let id = quote_ident(self.table.id_column());
        let sql = format!(
            "SELECT {id}, {}, {} FROM {} WHERE {} ORDER BY {id}",
            quote_ident(self.table.title_column()),
            quote_ident(self.table.slug_column()),
            quote_ident(self.table.table()),
            self.blank_slug_filter()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            let title = title_text(row.get(1)?);
            Ok(SlugRecord::new(RecordId(row.get(0)?), title, row.get(2)?))
        })?;
        let records = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = records.len(), "Fetched rows with blank slug");
        Ok(records)
    }

    fn count_active_rows_with_slug_excluding(
        &self,
        slug: &Slug,
        exclude_id: RecordId,
    ) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ?1 AND {} != ?2 AND COALESCE({}, 0) = 0",
            quote_ident(self.table.table()),
            quote_ident(self.table.slug_column()),
            quote_ident(self.table.id_column()),
            quote_ident(self.table.deleted_column()),
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let count: i64 = stmt.query_row(params![slug.as_str(), exclude_id.0], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn persist_slug(&self, id: RecordId, slug: &Slug) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "UPDATE {} SET {} = ?1 WHERE {} = ?2",
            quote_ident(self.table.table()),
            quote_ident(self.table.slug_column()),
            quote_ident(self.table.id_column()),
        );
        let affected = conn.execute(&sql, params![slug.as_str(), id.0])?;
        if affected == 0 {
            return Err(StorageError::NotFound { entity: "record", id: id.to_string() });
        }
        tracing::debug!(id = %id, slug = %slug, "Persisted slug");
        Ok(())
    }
}
