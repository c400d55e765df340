//! Collision resolution against the live table.

use slugfill_core::constants::MAX_ATTEMPTS;
use slugfill_core::{RecordId, Slug};
use slugfill_storage::SlugStore;

use crate::error::ServiceError;

/// How a candidate was turned into its final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Candidate was free as is.
    Unchanged,
    /// First free numbered variant.
    Suffixed(u32),
    /// Every variant up to `MAX_ATTEMPTS` collided; the last one is returned anyway.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub slug: Slug,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    pub fn is_exhausted(&self) -> bool {
        self.outcome == ResolutionOutcome::Exhausted
    }

    pub fn into_slug(self) -> Slug {
        self.slug
    }
}

/// Finds the value to persist so no two active rows share a slug.
///
/// Suffixes are tried in increasing order from 1, so the result only depends
/// on the current table contents.
pub struct UniquenessResolver<'a, St: SlugStore + ?Sized> {
    store: &'a St,
}

impl<'a, St: SlugStore + ?Sized> UniquenessResolver<'a, St> {
    pub fn new(store: &'a St) -> Self {
        Self { store }
    }

    /// Issues at most `MAX_ATTEMPTS + 1` count queries and never writes.
    pub fn resolve_unique(
        &self,
        exclude_id: RecordId,
        candidate: &Slug,
    ) -> Result<Resolution, ServiceError> {
        if self.is_free(candidate, exclude_id)? {
            return Ok(Resolution { slug: candidate.clone(), outcome: ResolutionOutcome::Unchanged });
        }

        for counter in 1..=MAX_ATTEMPTS {
            let variant = candidate.with_suffix(counter);
            if self.is_free(&variant, exclude_id)? {
                tracing::debug!(id = %exclude_id, slug = %variant, "Resolved slug collision");
                return Ok(Resolution { slug: variant, outcome: ResolutionOutcome::Suffixed(counter) });
            }
        }

        let fallback = candidate.with_suffix(MAX_ATTEMPTS);
        tracing::warn!(
            id = %exclude_id,
            slug = %fallback,
            max_attempts = MAX_ATTEMPTS,
            "All numbered slug variants are taken, keeping a duplicate"
        );
        Ok(Resolution { slug: fallback, outcome: ResolutionOutcome::Exhausted })
    }

    fn is_free(&self, slug: &Slug, exclude_id: RecordId) -> Result<bool, ServiceError> {
        Ok(self.store.count_active_rows_with_slug_excluding(slug, exclude_id)? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    fn slug(value: &str) -> Slug {
        Slug::new(value).unwrap()
    }

    fn resolve(store: &MemoryStore, id: i64, candidate: &str) -> Resolution {
        UniquenessResolver::new(store).resolve_unique(RecordId(id), &slug(candidate)).unwrap()
    }

    #[test]
    fn free_candidate_is_returned_unchanged() {
        let store = MemoryStore::new();
        store.insert(1, "Hello", None);

        let resolution = resolve(&store, 1, "hello");
        assert_eq!(resolution.slug.as_str(), "hello");
        assert_eq!(resolution.outcome, ResolutionOutcome::Unchanged);
        assert_eq!(store.count_queries(), 1);
    }

    #[test]
    fn first_collision_gets_suffix_one() {
        let store = MemoryStore::new();
        store.insert(1, "Hello", Some("hello"));
        store.insert(2, "Hello", None);

        let resolution = resolve(&store, 2, "hello");
        assert_eq!(resolution.slug.as_str(), "hello-1");
        assert_eq!(resolution.outcome, ResolutionOutcome::Suffixed(1));
    }

    #[test]
    fn lowest_free_counter_wins() {
        let store = MemoryStore::new();
        store.insert(1, "Hello", Some("hello"));
        store.insert(2, "Hello", Some("hello-1"));
        store.insert(3, "Hello", Some("hello-2"));
        store.insert(4, "Hello", Some("hello-4"));
        store.insert(5, "Hello", None);

        let resolution = resolve(&store, 5, "hello");
        assert_eq!(resolution.slug.as_str(), "hello-3");
        assert_eq!(resolution.outcome, ResolutionOutcome::Suffixed(3));
        assert_eq!(store.count_queries(), 4);
    }

    #[test]
    fn own_value_is_not_a_collision() {
        let store = MemoryStore::new();
        store.insert(7, "Hello", Some("hello"));

        assert_eq!(resolve(&store, 7, "hello").slug.as_str(), "hello");
    }

    #[test]
    fn deleted_rows_do_not_collide() {
        let store = MemoryStore::new();
        store.insert_deleted(1, "Hello", Some("hello"));
        store.insert(2, "Hello", None);

        assert_eq!(resolve(&store, 2, "hello").slug.as_str(), "hello");
    }

    #[test]
    fn exhausted_budget_returns_last_variant() {
        let store = MemoryStore::new();
        store.insert(1, "X", Some("x"));
        for counter in 1..=100_i64 {
            store.insert(1 + counter, "X", Some(format!("x-{counter}").as_str()));
        }
        store.insert(500, "X", None);

        let resolution = resolve(&store, 500, "x");
        assert_eq!(resolution.slug.as_str(), "x-100");
        assert!(resolution.is_exhausted());
        assert_eq!(store.count_queries(), 101);
    }

    #[test]
    fn storage_failure_propagates() {
        let store = MemoryStore::new();
        store.fail_counts();

        let err = UniquenessResolver::new(&store)
            .resolve_unique(RecordId(1), &slug("hello"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
