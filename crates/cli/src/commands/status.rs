use serde::Serialize;
use slugfill_core::SlugSanitizer;
use slugfill_service::SlugUpdater;
use slugfill_storage::{RunRecord, SlugStore, Storage};

#[derive(Serialize)]
struct Status {
    identifier: String,
    slug_column_present: bool,
    update_necessary: bool,
    blank_rows: Option<u64>,
    last_run: Option<RunRecord>,
}

pub(crate) fn run(storage: &Storage, identifier: &str) -> anyhow::Result<()> {
    let slug_column_present = storage.verify_prerequisites()?;

    // Without a slug column every row still needs one, and there is nothing to count yet.
    let (update_necessary, blank_rows) = if slug_column_present {
        let sanitizer = SlugSanitizer::default();
        let updater = SlugUpdater::new(storage, &sanitizer).with_identifier(identifier);
        (updater.update_necessary()?, Some(storage.count_rows_with_blank_slug()?))
    } else {
        (true, None)
    };

    let status = Status {
        identifier: identifier.to_owned(),
        slug_column_present,
        update_necessary,
        blank_rows,
        last_run: storage.last_run(identifier)?,
    };
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
