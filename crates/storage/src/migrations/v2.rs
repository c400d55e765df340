pub(super) const SQL_POLICY: &str = "policy";
pub(super) const SQL_POLICY_DEF: &str = "TEXT NOT NULL DEFAULT 'accept'";

pub(super) const INDEX_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_slugfill_runs_identifier ON slugfill_runs(identifier, id);
";
