//! Row-by-row backfill of blank slugs.

use slugfill_core::constants::{DEFAULT_UPDATER_IDENTIFIER, UPDATER_DESCRIPTION, UPDATER_TITLE};
use slugfill_core::{BackfillReport, ExhaustionPolicy, Sanitizer, SlugRecord};
use slugfill_storage::SlugStore;

use crate::error::ServiceError;
use crate::generator::CandidateGenerator;
use crate::resolver::{ResolutionOutcome, UniquenessResolver};

/// Fills every blank slug of the configured table from the record title.
///
/// Rows are processed strictly one after another: each write must be visible
/// to the collision count of the next row.
pub struct SlugUpdater<'a, St: SlugStore + ?Sized, Sa: Sanitizer + ?Sized> {
    store: &'a St,
    generator: CandidateGenerator<'a, Sa>,
    resolver: UniquenessResolver<'a, St>,
    policy: ExhaustionPolicy,
    identifier: String,
}

impl<'a, St: SlugStore + ?Sized, Sa: Sanitizer + ?Sized> SlugUpdater<'a, St, Sa> {
    pub fn new(store: &'a St, sanitizer: &'a Sa) -> Self {
        Self {
            store,
            generator: CandidateGenerator::new(sanitizer),
            resolver: UniquenessResolver::new(store),
            policy: ExhaustionPolicy::default(),
            identifier: DEFAULT_UPDATER_IDENTIFIER.to_owned(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Name under which runs of this updater are recorded.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &'static str {
        UPDATER_TITLE
    }

    pub fn description(&self) -> &'static str {
        UPDATER_DESCRIPTION
    }

    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Whether any row (deleted ones included) still has a blank slug.
    pub fn update_necessary(&self) -> Result<bool, ServiceError> {
        Ok(self.store.count_rows_with_blank_slug()? > 0)
    }

    /// Run the backfill once.
    ///
    /// Stops at the first storage error; rows written before it stay written.
    pub fn execute_update(&self) -> Result<BackfillReport, ServiceError> {
        let records = self.store.fetch_rows_with_blank_slug()?;
        let mut report = BackfillReport::start();
        report.scanned = records.len();

        tracing::info!(
            identifier = %self.identifier,
            rows = records.len(),
            policy = %self.policy,
            "Starting slug backfill"
        );

        for record in &records {
            self.update_record(record, &mut report)?;
        }

        let report = report.finish();
        tracing::info!(
            identifier = %self.identifier,
            updated = report.updated,
            suffixed = report.suffixed,
            skipped = report.skipped(),
            exhausted = report.exhausted.len(),
            "Slug backfill finished"
        );
        Ok(report)
    }

    fn update_record(
        &self,
        record: &SlugRecord,
        report: &mut BackfillReport,
    ) -> Result<(), ServiceError> {
        if !record.has_title() {
            tracing::debug!(id = %record.id, "Skipping record with empty title");
            report.skipped_blank_title += 1;
            return Ok(());
        }

        let candidate = match self.generator.generate_candidate(&record.title) {
            Ok(candidate) => candidate,
            Err(ServiceError::Sanitize(e)) if e.is_empty_result() => {
                tracing::warn!(id = %record.id, title = %record.title, "Title yields no slug, skipping");
                report.skipped_unsanitizable += 1;
                return Ok(());
            },
            Err(e) => return Err(e),
        };

        let resolution = self.resolver.resolve_unique(record.id, &candidate)?;
        match resolution.outcome {
            ResolutionOutcome::Unchanged => {},
            ResolutionOutcome::Suffixed(_) => report.suffixed += 1,
            ResolutionOutcome::Exhausted => {
                if self.policy == ExhaustionPolicy::Abort {
                    return Err(ServiceError::UniquenessBudgetExhausted {
                        id: record.id,
                        slug: candidate,
                    });
                }
                report.exhausted.push(record.id);
            },
        }

        self.store.persist_slug(record.id, &resolution.slug)?;
        report.updated += 1;
        Ok(())
    }
}
