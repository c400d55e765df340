use rusqlite::Connection;

/// Whether `table` has a column named `column`.
///
/// `table` must already be a validated identifier.
pub(crate) fn column_exists(
    conn: &Connection,
    table: &str,
    column: &str,
) -> Result<bool, rusqlite::Error> {
    let sql = format!("PRAGMA table_info(\"{table}\")");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in rows {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add a column unless it is already present. Returns `true` if it was added.
pub(crate) fn add_column_if_not_exists(
    conn: &Connection,
    table: &str,
    column: &str,
    col_type: &str,
) -> Result<bool, rusqlite::Error> {
    if column_exists(conn, table, column)? {
        return Ok(false);
    }
    let sql = format!("ALTER TABLE \"{table}\" ADD COLUMN \"{column}\" {col_type}");
    conn.execute(&sql, [])?;
    Ok(true)
}
