use serde::Serialize;
use slugfill_core::TableConfig;
use slugfill_core::constants::{MAX_ATTEMPTS, UPDATER_DESCRIPTION, UPDATER_TITLE};

#[derive(Serialize)]
struct Info<'a> {
    identifier: &'a str,
    title: &'static str,
    description: &'static str,
    max_attempts: u32,
    table: &'a TableConfig,
}

pub(crate) fn run(identifier: &str, table: &TableConfig) -> anyhow::Result<()> {
    let info = Info {
        identifier,
        title: UPDATER_TITLE,
        description: UPDATER_DESCRIPTION,
        max_attempts: MAX_ATTEMPTS,
        table,
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
