use slugfill_storage::Storage;

pub(crate) fn run(storage: &Storage, limit: usize) -> anyhow::Result<()> {
    let runs = storage.list_runs(limit)?;
    println!("{}", serde_json::to_string_pretty(&runs)?);
    Ok(())
}
