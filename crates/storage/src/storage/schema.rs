use rusqlite::params;

use super::{Storage, get_conn};
use crate::error::StorageError;
use crate::migrations::column_helpers::{add_column_if_not_exists, column_exists};

impl Storage {
    /// Read-only check that the configured table can be backfilled.
    ///
    /// The table and its id, title and deleted columns must exist. Returns
    /// whether the slug column is already present. Nothing is altered.
    ///
    /// # Errors
    /// Returns [`StorageError::MissingTable`] or [`StorageError::MissingColumn`].
    pub fn verify_prerequisites(&self) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let table = self.table.table();

        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![table],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(StorageError::MissingTable(table.to_owned()));
        }

        for column in
            [self.table.id_column(), self.table.title_column(), self.table.deleted_column()]
        {
            if !column_exists(&conn, table, column)? {
                return Err(StorageError::MissingColumn {
                    table: table.to_owned(),
                    column: column.to_owned(),
                });
            }
        }

        Ok(column_exists(&conn, table, self.table.slug_column())?)
    }

    /// Verify the configured table and add a missing slug column as
    /// `TEXT DEFAULT ''`.
    ///
    /// # Errors
    /// Returns [`StorageError::MissingTable`] or [`StorageError::MissingColumn`].
    pub fn check_prerequisites(&self) -> Result<(), StorageError> {
        if self.verify_prerequisites()? {
            return Ok(());
        }
        let conn = get_conn(&self.pool)?;
        let table = self.table.table();
        let slug_column = self.table.slug_column();
        if add_column_if_not_exists(&conn, table, slug_column, "TEXT DEFAULT ''")? {
            tracing::info!(table, column = slug_column, "Added missing slug column");
        }
        Ok(())
    }
}
