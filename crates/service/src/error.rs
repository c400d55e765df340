//! Typed error enum for the service layer.

use slugfill_core::{RecordId, SanitizeError, Slug};
use slugfill_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and sanitizer failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage call failed; the run stops here.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Sanitizer rejected a title.
    #[error("sanitize: {0}")]
    Sanitize(#[from] SanitizeError),

    /// Every numbered variant collided and the policy says abort.
    #[error("no free slug for record {id}: {slug} and all numbered variants are taken")]
    UniquenessBudgetExhausted { id: RecordId, slug: Slug },
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::UniquenessBudgetExhausted { .. })
    }
}
