//! Fileshelf CLI: inspect how a file record resolves against local storage.
//!
//! Configuration comes from FILES_* environment variables (or a .env file).
//! Output is JSON on stdout; logs go to stderr (RUST_LOG).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fileshelf_cli::{init_tracing, load_registry, RecordArgs};
use fileshelf_core::{ExtensionMethod, FilesConfig};
use fileshelf_services::FileResolver;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "fileshelf", about = "Fileshelf metadata inspector")]
struct Cli {
    /// JSON manifest of additional export handlers
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full summary of a record
    Card {
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Resolve the extension of a record
    Extension {
        #[command(flatten)]
        record: RecordArgs,
        /// Run a single method: type, mime, clientname, localname, filename
        #[arg(long)]
        method: Option<ExtensionMethod>,
    },
    /// List export handlers applicable to a record
    Exports {
        #[command(flatten)]
        record: RecordArgs,
        /// Leave out handlers that accept every extension
        #[arg(long)]
        no_wildcard: bool,
    },
    /// Resolve the thumbnail of a record
    Thumbnail {
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Locate the configured default thumbnail
    DefaultThumbnail,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = FilesConfig::from_env().context(
        "Invalid file storage configuration. Check FILES_STORAGE_PATH and related variables",
    )?;
    let registry = load_registry(cli.manifest.as_deref())?;
    let resolver = FileResolver::from_config(config, registry);

    match cli.command {
        Commands::Card { record } => {
            let card = resolver.card(&record.into_record())?;
            print_json(&card)?;
        }
        Commands::Extension { record, method } => {
            let record = record.into_record();
            let extension = resolver.extension(&record, method);
            print_json(&serde_json::json!({ "id": record.id, "extension": extension }))?;
        }
        Commands::Exports {
            record,
            no_wildcard,
        } => {
            let record = record.into_record();
            let exports = resolver.exports(&record, !no_wildcard);
            print_json(&serde_json::json!({ "id": record.id, "exports": exports }))?;
        }
        Commands::Thumbnail { record } => {
            let record = record.into_record();
            let thumbnail = resolver.thumbnail(&record)?;
            print_json(&serde_json::json!({ "id": record.id, "thumbnail": thumbnail }))?;
        }
        Commands::DefaultThumbnail => {
            let path = resolver.default_thumbnail()?;
            print_json(&serde_json::json!({ "default_thumbnail": path }))?;
        }
    }

    Ok(())
}
