//! Shared constants for slugfill.

/// Highest numeric suffix tried before the resolver gives up and keeps the last variant.
pub const MAX_ATTEMPTS: u32 = 100;

/// Separator between a base slug and its numeric suffix.
pub const SUFFIX_SEPARATOR: char = '-';

/// Default number of pooled SQLite connections.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Env var overriding the database path.
pub const ENV_DB_PATH: &str = "SLUGFILL_DB";

/// Env var overriding the connection pool size.
pub const ENV_DB_POOL_SIZE: &str = "SLUGFILL_DB_POOL_SIZE";

/// Default identifier under which runs are recorded.
pub const DEFAULT_UPDATER_IDENTIFIER: &str = "slugfillUpdateSlug";

/// Default number of history rows returned by `history`.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Human readable name of the updater.
pub const UPDATER_TITLE: &str = "Update slugs of records";

/// What the updater does, shown by `info`.
pub const UPDATER_DESCRIPTION: &str =
    "Update empty slug column of records with an URI compatible version of the title";
