//! Default thumbnail resolution
//!
//! The configured default thumbnail is located once per process and cached.
//! Only success is cached: a failed search is repeated on the next call, so a
//! deployment that fixes its assets recovers without a restart.

use std::path::PathBuf;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use fileshelf_core::{path_extension, FileError, FileResult, FilesConfig};
use fileshelf_storage::PathLocator;

static GLOBAL: LazyLock<Arc<DefaultThumbnail>> =
    LazyLock::new(|| Arc::new(DefaultThumbnail::new()));

/// Lazily resolved absolute path of the default thumbnail.
#[derive(Debug, Default)]
pub struct DefaultThumbnail {
    resolved: Mutex<Option<PathBuf>>,
}

impl DefaultThumbnail {
    pub const fn new() -> Self {
        Self {
            resolved: Mutex::new(None),
        }
    }

    /// The process-wide instance.
    pub fn global() -> Arc<DefaultThumbnail> {
        Arc::clone(&GLOBAL)
    }

    /// Cached path, if a previous call resolved it.
    pub fn cached(&self) -> Option<PathBuf> {
        self.resolved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return the cached path, or search for `config.default_thumbnail` through
    /// `locator` and cache the result.
    ///
    /// # Errors
    /// `FileError::NotFound` when no search location holds the file.
    pub fn locate(&self, config: &FilesConfig, locator: &dyn PathLocator) -> FileResult<PathBuf> {
        // Held across the search so concurrent first callers resolve once.
        let mut resolved = self
            .resolved
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(path) = resolved.as_ref() {
            return Ok(path.clone());
        }

        let path = config.default_thumbnail.as_str();
        let extension = path_extension(path);

        match locator.locate(path, extension) {
            Some(found) => {
                tracing::debug!(
                    default_thumbnail = %path,
                    resolved = %found.display(),
                    "Resolved default thumbnail"
                );
                *resolved = Some(found.clone());
                Ok(found)
            }
            None => {
                tracing::error!(
                    default_thumbnail = %path,
                    "Could not locate default thumbnail"
                );
                Err(FileError::NotFound(format!(
                    "Could not locate default thumbnail: {}",
                    path
                )))
            }
        }
    }
}
