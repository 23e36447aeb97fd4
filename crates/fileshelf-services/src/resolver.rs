//! File metadata resolution
//!
//! [`FileResolver`] answers the questions a file listing asks about a stored
//! record: where the bytes are, what the extension most likely is, which
//! thumbnail to show and which export handlers apply. Only a missing default
//! thumbnail is an error; every other absence is reported as an empty result
//! or handled by a fallback.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fileshelf_core::path_utils::{canonicalize_or_raw, join_relative};
use fileshelf_core::{path_extension, ExtensionMethod, FileRecord, FileResult, FilesConfig};
use fileshelf_exports::HandlerRegistry;
use fileshelf_storage::{LocalLocator, PathLocator};

use crate::mime::{DefaultMimeRegistry, MimeRegistry};
use crate::object::FileObject;
use crate::thumbnail::DefaultThumbnail;

type Strategy = fn(&FileResolver, &FileRecord) -> Option<String>;

/// Extension strategies in cascade order.
const STRATEGIES: [(ExtensionMethod, Strategy); 5] = [
    (
        ExtensionMethod::Type,
        FileResolver::extension_from_type as Strategy,
    ),
    (
        ExtensionMethod::Mime,
        FileResolver::extension_from_content as Strategy,
    ),
    (
        ExtensionMethod::ClientName,
        FileResolver::extension_from_clientname as Strategy,
    ),
    (
        ExtensionMethod::LocalName,
        FileResolver::extension_from_localname as Strategy,
    ),
    (
        ExtensionMethod::FileName,
        FileResolver::extension_from_filename as Strategy,
    ),
];

/// Summary of a file for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCard {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: i64,
    pub extension: String,
    pub path: PathBuf,
    pub thumbnail: PathBuf,
    pub exports: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Resolves paths, extensions, thumbnails and exports for file records.
#[derive(Clone)]
pub struct FileResolver {
    config: Arc<FilesConfig>,
    locator: Arc<dyn PathLocator>,
    mimes: Arc<dyn MimeRegistry>,
    exports: Arc<HandlerRegistry>,
    default_thumbnail: Arc<DefaultThumbnail>,
}

impl FileResolver {
    /// Create a resolver sharing the process-wide default thumbnail cache.
    pub fn new(
        config: Arc<FilesConfig>,
        locator: Arc<dyn PathLocator>,
        mimes: Arc<dyn MimeRegistry>,
        exports: Arc<HandlerRegistry>,
    ) -> Self {
        Self {
            config,
            locator,
            mimes,
            exports,
            default_thumbnail: DefaultThumbnail::global(),
        }
    }

    /// Resolver over the local filesystem with the default MIME registry.
    pub fn from_config(config: FilesConfig, exports: HandlerRegistry) -> Self {
        let locator = Arc::new(LocalLocator::from_config(&config));
        let mimes = Arc::new(DefaultMimeRegistry::new(config.sniff_limit_bytes));
        Self::new(Arc::new(config), locator, mimes, Arc::new(exports))
    }

    /// Use a separate default thumbnail cache instead of the process-wide one.
    pub fn with_default_thumbnail(mut self, default_thumbnail: Arc<DefaultThumbnail>) -> Self {
        self.default_thumbnail = default_thumbnail;
        self
    }

    pub fn config(&self) -> &FilesConfig {
        &self.config
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.exports
    }

    /// Absolute path of the stored file, canonicalized when it exists.
    pub fn path(&self, record: &FileRecord) -> PathBuf {
        canonicalize_or_raw(self.locator.storage_path(&record.localname))
    }

    /// Read handle on the stored file, or `None` when it is missing or unreadable.
    pub fn object(&self, record: &FileRecord) -> Option<FileObject> {
        let path = self.path(record);
        match FileObject::open(&path) {
            Ok(object) => Some(object),
            Err(e) => {
                tracing::debug!(
                    file_id = %record.id,
                    path = %path.display(),
                    error = %e,
                    "Stored file is not available"
                );
                None
            }
        }
    }

    /// Most likely extension of the file, without the dot; empty when no
    /// strategy found one.
    ///
    /// With `method` set only that strategy runs. `Type` and `Mime` never run
    /// for records whose type is the unknown-type sentinel.
    pub fn extension(&self, record: &FileRecord, method: Option<ExtensionMethod>) -> String {
        let trusted = record.has_trusted_type();

        for (candidate, strategy) in STRATEGIES {
            if method.is_some_and(|m| m != candidate) {
                continue;
            }
            if candidate.is_content_based() && !trusted {
                continue;
            }

            if let Some(extension) = strategy(self, record).filter(|ext| !ext.is_empty()) {
                tracing::debug!(
                    file_id = %record.id,
                    method = %candidate,
                    extension = %extension,
                    "Resolved file extension"
                );
                return extension;
            }
        }

        String::new()
    }

    /// [`FileResolver::extension`] with a textual selector; `""` means every method.
    pub fn extension_by_selector(&self, record: &FileRecord, selector: &str) -> FileResult<String> {
        let method = ExtensionMethod::parse_selector(selector)?;
        Ok(self.extension(record, method))
    }

    fn extension_from_type(&self, record: &FileRecord) -> Option<String> {
        self.mimes.extension_for_type(&record.content_type)
    }

    fn extension_from_content(&self, record: &FileRecord) -> Option<String> {
        let mut object = self.object(record)?;
        self.mimes.guess_extension(&mut object)
    }

    fn extension_from_clientname(&self, record: &FileRecord) -> Option<String> {
        Self::name_extension(record.clientname.as_deref())
    }

    fn extension_from_localname(&self, record: &FileRecord) -> Option<String> {
        Self::name_extension(Some(&record.localname))
    }

    fn extension_from_filename(&self, record: &FileRecord) -> Option<String> {
        Self::name_extension(record.filename.as_deref())
    }

    fn name_extension(name: Option<&str>) -> Option<String> {
        let extension = path_extension(name?);
        (!extension.is_empty()).then(|| extension.to_string())
    }

    /// Ids of the export handlers applicable to this file: handlers listing its
    /// extension first, then (if requested) wildcard handlers. A handler in
    /// both groups appears twice.
    pub fn exports(&self, record: &FileRecord, include_wildcard: bool) -> Vec<String> {
        let mut exports: Vec<String> = Vec::new();

        let extension = self.extension(record, None);
        if !extension.is_empty() {
            exports.extend(
                self.exports
                    .find_by_extension(&extension)
                    .iter()
                    .map(|h| h.id().to_string()),
            );
        }

        if include_wildcard {
            exports.extend(
                self.exports
                    .find_wildcard()
                    .iter()
                    .map(|h| h.id().to_string()),
            );
        }

        exports
    }

    /// Absolute path of the configured default thumbnail.
    ///
    /// # Errors
    /// `FileError::NotFound` when it cannot be found in any search location.
    pub fn default_thumbnail(&self) -> FileResult<PathBuf> {
        self.default_thumbnail
            .locate(&self.config, self.locator.as_ref())
    }

    /// Path of an existing image to show for this file: its own thumbnail when
    /// present on disk, the default thumbnail otherwise.
    ///
    /// # Errors
    /// `FileError::NotFound` when the default thumbnail is needed and missing.
    pub fn thumbnail(&self, record: &FileRecord) -> FileResult<PathBuf> {
        let thumbnails = self.locator.storage_path(&self.config.thumbnails_dir);
        let candidate = join_relative(&thumbnails, record.thumbnail_name());

        let path = if candidate.is_file() {
            candidate
        } else {
            tracing::debug!(
                file_id = %record.id,
                thumbnail = %record.thumbnail_name(),
                "Thumbnail missing, using default"
            );
            self.default_thumbnail()?
        };

        Ok(canonicalize_or_raw(path))
    }

    /// Everything a file listing shows about one record.
    pub fn card(&self, record: &FileRecord) -> FileResult<FileCard> {
        Ok(FileCard {
            id: record.id,
            name: record.display_name().to_string(),
            content_type: record.content_type.clone(),
            size: record.size,
            extension: self.extension(record, None),
            path: self.path(record),
            thumbnail: self.thumbnail(record)?,
            exports: self.exports(record, true),
            created_at: record.created_at,
            deleted: record.is_deleted(),
        })
    }
}

impl std::fmt::Debug for FileResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileResolver")
            .field("config", &self.config)
            .field("exports", &self.exports)
            .finish_non_exhaustive()
    }
}
