//! Storage layer for slugfill
//!
//! SQLite access to the table under repair plus the run-history bookkeeping.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
mod traits;
mod types;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::SlugStore;
pub use types::RunRecord;
