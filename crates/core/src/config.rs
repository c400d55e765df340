//! Explicit table, column and policy configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[expect(clippy::unwrap_used, reason = "static pattern is known to be valid")]
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

fn check_identifier(role: &'static str, name: &str) -> Result<(), CoreError> {
    if IDENTIFIER_RE.is_match(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidIdentifier { role, name: name.to_owned() })
    }
}

/// Table and column names of the records being repaired.
///
/// Names are interpolated into SQL, so they are only obtainable through
/// [`TableConfig::validated`] or [`TableConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableConfig {
    table: String,
    id_column: String,
    title_column: String,
    slug_column: String,
    deleted_column: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table: "tx_glossary2_domain_model_glossary".to_owned(),
            id_column: "uid".to_owned(),
            title_column: "title".to_owned(),
            slug_column: "path_segment".to_owned(),
            deleted_column: "deleted".to_owned(),
        }
    }
}

impl TableConfig {
    /// # Errors
    /// Returns [`CoreError::InvalidIdentifier`] if any name is not a plain SQL identifier.
    pub fn validated(
        table: impl Into<String>,
        id_column: impl Into<String>,
        title_column: impl Into<String>,
        slug_column: impl Into<String>,
        deleted_column: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let config = Self {
            table: table.into(),
            id_column: id_column.into(),
            title_column: title_column.into(),
            slug_column: slug_column.into(),
            deleted_column: deleted_column.into(),
        };
        check_identifier("table", &config.table)?;
        check_identifier("id column", &config.id_column)?;
        check_identifier("title column", &config.title_column)?;
        check_identifier("slug column", &config.slug_column)?;
        check_identifier("deleted column", &config.deleted_column)?;
        Ok(config)
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    #[must_use]
    pub fn title_column(&self) -> &str {
        &self.title_column
    }

    #[must_use]
    pub fn slug_column(&self) -> &str {
        &self.slug_column
    }

    #[must_use]
    pub fn deleted_column(&self) -> &str {
        &self.deleted_column
    }
}

/// Slug column settings handed to the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugFieldConfig {
    /// Joins the words of a slug.
    pub fallback_character: char,
    /// Literal substitutions applied before transliteration.
    pub replacements: BTreeMap<String, String>,
    /// Upper bound in bytes of the base slug, before any numeric suffix.
    pub max_length: Option<usize>,
}

impl Default for SlugFieldConfig {
    fn default() -> Self {
        Self { fallback_character: '-', replacements: BTreeMap::new(), max_length: None }
    }
}

impl SlugFieldConfig {
    /// Parse a `FROM=TO` pair and add it to the replacements.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidReplacement`] when `=` is missing or `FROM` is empty.
    pub fn add_replacement(&mut self, pair: &str) -> Result<(), CoreError> {
        match pair.split_once('=') {
            Some((from, to)) if !from.is_empty() => {
                self.replacements.insert(from.to_owned(), to.to_owned());
                Ok(())
            },
            _ => Err(CoreError::InvalidReplacement(pair.to_owned())),
        }
    }
}

/// What to do when every numbered variant up to the attempt bound is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Persist the last tried variant even though it collides.
    #[default]
    Accept,
    /// Stop the run with an error.
    Abort,
}

impl ExhaustionPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Accept => "accept",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for ExhaustionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExhaustionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "abort" => Ok(Self::Abort),
            _ => Err(CoreError::InvalidPolicy(s.to_owned())),
        }
    }
}
