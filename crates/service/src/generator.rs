use slugfill_core::{Sanitizer, Slug};

use crate::error::ServiceError;

/// Derives a base candidate from a title. No uniqueness check happens here.
pub struct CandidateGenerator<'a, Sa: Sanitizer + ?Sized> {
    sanitizer: &'a Sa,
}

impl<'a, Sa: Sanitizer + ?Sized> CandidateGenerator<'a, Sa> {
    pub fn new(sanitizer: &'a Sa) -> Self {
        Self { sanitizer }
    }

    /// `title` must be non-empty; blank titles are filtered out by the driver.
    pub fn generate_candidate(&self, title: &str) -> Result<Slug, ServiceError> {
        debug_assert!(!title.is_empty(), "blank titles never reach the generator");
        Ok(self.sanitizer.sanitize(title)?)
    }
}
