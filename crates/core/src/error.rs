use thiserror::Error;

/// Errors raised while building core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("slug must not be empty")]
    EmptySlug,

    #[error("invalid SQL identifier for {role}: {name:?}")]
    InvalidIdentifier { role: &'static str, name: String },

    #[error("invalid exhaustion policy: {0} (expected accept|abort)")]
    InvalidPolicy(String),

    #[error("invalid replacement {0:?} (expected FROM=TO)")]
    InvalidReplacement(String),
}

/// Errors produced by a [`Sanitizer`](crate::Sanitizer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    /// Input contained nothing that survives sanitization.
    #[error("title {input:?} sanitizes to an empty slug")]
    Empty { input: String },

    /// Sanitizer-specific failure.
    #[error("sanitizer failed: {0}")]
    Other(String),
}

impl SanitizeError {
    /// Whether the failure only means "nothing to derive a slug from".
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}
