//! Free text to slug conversion.

use unicode_normalization::UnicodeNormalization as _;

use crate::config::SlugFieldConfig;
use crate::error::SanitizeError;
use crate::record::Slug;

/// Turns free text into a candidate slug. Performs no uniqueness check.
pub trait Sanitizer: Send + Sync {
    /// # Errors
    /// Returns [`SanitizeError`] when no slug can be derived from `text`.
    fn sanitize(&self, text: &str) -> Result<Slug, SanitizeError>;
}

/// Default sanitizer: lowercase, transliterated, separator-joined words.
#[derive(Debug, Clone, Default)]
pub struct SlugSanitizer {
    config: SlugFieldConfig,
}

impl SlugSanitizer {
    #[must_use]
    pub fn new(config: SlugFieldConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SlugFieldConfig {
        &self.config
    }

    fn apply_replacements(&self, text: &str) -> String {
        let mut out: String = text.nfc().collect();
        for (from, to) in &self.config.replacements {
            out = out.replace(from.as_str(), to);
        }
        out
    }
}

/// Keep whole words while the result fits into `max_len` bytes.
fn truncate_words(slug: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(max_len);
    for word in slug.split('-') {
        let needed = if out.is_empty() { word.len() } else { word.len().saturating_add(1) };
        if out.len().saturating_add(needed) > max_len {
            break;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(word);
    }
    if out.is_empty() {
        // First word alone is too long; slugify output is ASCII so byte slicing is safe.
        out.push_str(slug.get(..max_len).unwrap_or(slug));
    }
    out
}

impl Sanitizer for SlugSanitizer {
    fn sanitize(&self, text: &str) -> Result<Slug, SanitizeError> {
        let prepared = self.apply_replacements(text);
        let mut value = slug::slugify(prepared);

        if let Some(max_len) = self.config.max_length {
            if value.len() > max_len {
                value = truncate_words(&value, max_len);
            }
        }
        if self.config.fallback_character != '-' {
            value = value.replace('-', &self.config.fallback_character.to_string());
        }

        Slug::new(value).map_err(|_| SanitizeError::Empty { input: text.to_owned() })
    }
}
