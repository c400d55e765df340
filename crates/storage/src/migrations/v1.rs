pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS slugfill_runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    identifier TEXT NOT NULL,
    started_at TEXT NOT NULL,
    finished_at TEXT,
    scanned INTEGER NOT NULL DEFAULT 0,
    updated INTEGER NOT NULL DEFAULT 0,
    skipped INTEGER NOT NULL DEFAULT 0,
    suffixed INTEGER NOT NULL DEFAULT 0,
    exhausted TEXT NOT NULL DEFAULT '[]'
);
";
