//! Record identity and slug value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SUFFIX_SEPARATOR;
use crate::error::CoreError;

/// Primary key of a row, assigned by the host storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A non-empty URL-safe identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Wrap an already sanitized value.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptySlug`] for an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::EmptySlug);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numbered variant used on collision: `hello` + 3 -> `hello-3`.
    #[must_use]
    pub fn with_suffix(&self, counter: u32) -> Self {
        Self(format!("{}{SUFFIX_SEPARATOR}{counter}", self.0))
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// A row whose slug column is blank and may need repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugRecord {
    pub id: RecordId,
    /// `NULL` titles are read as empty strings.
    pub title: String,
    pub slug: Option<String>,
}

impl SlugRecord {
    #[must_use]
    pub fn new(id: RecordId, title: impl Into<String>, slug: Option<String>) -> Self {
        Self { id, title: title.into(), slug }
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slug_is_rejected() {
        assert_eq!(Slug::new(""), Err(CoreError::EmptySlug));
    }

    #[test]
    fn suffix_is_hyphen_joined() {
        let slug = Slug::new("hello").unwrap();
        assert_eq!(slug.with_suffix(1).as_str(), "hello-1");
        assert_eq!(slug.with_suffix(100).as_str(), "hello-100");
        assert_eq!(slug.as_str(), "hello");
    }

    #[test]
    fn slug_deserialization_rejects_empty() {
        assert!(serde_json::from_str::<Slug>("\"\"").is_err());
        let slug: Slug = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(slug.as_str(), "abc");
    }

    #[test]
    fn whitespace_title_counts_as_present() {
        let record = SlugRecord::new(RecordId(7), "  ", None);
        assert!(record.has_title());
        assert!(!SlugRecord::new(RecordId(8), "", Some(String::new())).has_title());
    }
}
