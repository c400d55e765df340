mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use slugfill_core::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_UPDATER_IDENTIFIER, ENV_DB_PATH};
use slugfill_core::env_config::env_path;
use slugfill_core::{ExhaustionPolicy, SlugFieldConfig, TableConfig};
use slugfill_storage::Storage;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slugfill")]
#[command(about = "Backfill empty slug columns from record titles", long_about = None)]
struct Cli {
    /// SQLite database file (falls back to $SLUGFILL_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Name under which runs are recorded
    #[arg(long, global = true, default_value = DEFAULT_UPDATER_IDENTIFIER)]
    identifier: String,

    #[command(flatten)]
    table: TableArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableArgs {
    #[arg(long, global = true, default_value = "tx_glossary2_domain_model_glossary")]
    table: String,
    #[arg(long, global = true, default_value = "uid")]
    id_column: String,
    #[arg(long, global = true, default_value = "title")]
    title_column: String,
    #[arg(long, global = true, default_value = "path_segment")]
    slug_column: String,
    #[arg(long, global = true, default_value = "deleted")]
    deleted_column: String,
}

impl TableArgs {
    fn to_config(&self) -> Result<TableConfig> {
        Ok(TableConfig::validated(
            &self.table,
            &self.id_column,
            &self.title_column,
            &self.slug_column,
            &self.deleted_column,
        )?)
    }
}

#[derive(Args)]
struct SlugArgs {
    /// Character joining the words of a slug
    #[arg(long, default_value = "-")]
    fallback_character: char,
    /// Maximum length of the base slug
    #[arg(long)]
    max_length: Option<usize>,
    /// Literal replacement applied before sanitizing, repeatable
    #[arg(long = "replace", value_name = "FROM=TO")]
    replacements: Vec<String>,
}

impl SlugArgs {
    fn to_config(&self) -> Result<SlugFieldConfig> {
        let mut config = SlugFieldConfig {
            fallback_character: self.fallback_character,
            max_length: self.max_length,
            ..SlugFieldConfig::default()
        };
        for pair in &self.replacements {
            config.add_replacement(pair)?;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether any row still has a blank slug
    Status,
    /// Fill blank slugs once
    Run {
        /// What to do when all numbered variants are taken
        #[arg(long, default_value = "accept")]
        on_exhausted: ExhaustionPolicy,
        #[command(flatten)]
        slug: SlugArgs,
    },
    /// Show updater metadata and configuration
    Info,
    /// List recorded runs
    History {
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
}

pub(crate) fn get_db_path(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| env_path(ENV_DB_PATH)).unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("slugfill")
            .join("records.db")
    })
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn open_storage(db: Option<PathBuf>, table: TableConfig) -> Result<Storage> {
    let db_path = get_db_path(db);
    ensure_db_dir(&db_path)?;
    Ok(Storage::new(&db_path, table)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = cli.table.to_config()?;

    match cli.command {
        Commands::Info => commands::info::run(&cli.identifier, &table),
        Commands::Status => {
            commands::status::run(&open_storage(cli.db, table)?, &cli.identifier)
        },
        Commands::Run { on_exhausted, slug } => commands::run::run(
            &open_storage(cli.db, table)?,
            &cli.identifier,
            on_exhausted,
            slug.to_config()?,
        ),
        Commands::History { limit } => commands::history::run(&open_storage(cli.db, table)?, limit),
    }
}
