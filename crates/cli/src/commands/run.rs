//! One-shot slug backfill.

use slugfill_core::{ExhaustionPolicy, SlugFieldConfig, SlugSanitizer};
use slugfill_service::SlugUpdater;
use slugfill_storage::Storage;

pub(crate) fn run(
    storage: &Storage,
    identifier: &str,
    policy: ExhaustionPolicy,
    slug_config: SlugFieldConfig,
) -> anyhow::Result<()> {
    storage.check_prerequisites()?;

    let sanitizer = SlugSanitizer::new(slug_config);
    let updater =
        SlugUpdater::new(storage, &sanitizer).with_identifier(identifier).with_policy(policy);

    if !updater.update_necessary()? {
        tracing::info!(identifier, "No blank slugs, nothing to do");
        return Ok(());
    }

    let report = updater.execute_update()?;
    let run_id = storage.record_run(updater.identifier(), policy, &report)?;
    tracing::info!(run_id, "Recorded run");

    if !report.is_clean() {
        tracing::warn!(
            records = ?report.exhausted,
            "Some records kept a duplicate slug after exhausting all numbered variants"
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
