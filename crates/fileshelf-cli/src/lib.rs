use std::path::Path;

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use uuid::Uuid;

use fileshelf_core::constants::UNKNOWN_CONTENT_TYPE;
use fileshelf_core::FileRecord;
use fileshelf_exports::HandlerRegistry;

/// Record fields given on the command line.
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Stored name, relative to the storage root
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub localname: String,
    /// Declared MIME type
    #[arg(long = "type", default_value = UNKNOWN_CONTENT_TYPE)]
    pub content_type: String,
    /// Name the uploader gave the file
    #[arg(long)]
    pub clientname: Option<String>,
    /// Display name
    #[arg(long)]
    pub filename: Option<String>,
    /// Thumbnail name, relative to the thumbnails directory
    #[arg(long)]
    pub thumbnail: Option<String>,
    #[arg(long, default_value_t = 0)]
    pub size: i64,
    /// Record id; a fresh one is generated when omitted
    #[arg(long)]
    pub id: Option<Uuid>,
}

impl RecordArgs {
    pub fn into_record(self) -> FileRecord {
        let mut record = FileRecord::new(self.localname, self.content_type);
        if let Some(id) = self.id {
            record.id = id;
        }
        record.clientname = self.clientname;
        record.filename = self.filename;
        record.thumbnail = self.thumbnail;
        record.size = self.size;
        record
    }
}

/// Built-in export handlers plus those declared in an optional JSON manifest.
pub fn load_registry(manifest: Option<&Path>) -> anyhow::Result<HandlerRegistry> {
    let mut registry = HandlerRegistry::with_defaults();

    if let Some(path) = manifest {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read export manifest {}", path.display()))?;
        let count = registry
            .register_manifest(&contents)
            .with_context(|| format!("Failed to load export manifest {}", path.display()))?;
        tracing::info!(manifest = %path.display(), handlers = count, "Loaded export handlers");
    }

    Ok(registry)
}

/// Initialize tracing for CLI binaries. Logs go to stderr so stdout stays JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
