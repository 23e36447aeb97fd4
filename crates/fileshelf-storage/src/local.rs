use std::path::{Path, PathBuf};

use fileshelf_core::path_utils::{canonicalize_or_raw, join_relative};
use fileshelf_core::{path_extension, FilesConfig};

use crate::traits::PathLocator;

/// Local filesystem locator
#[derive(Clone, Debug)]
pub struct LocalLocator {
    storage_root: PathBuf,
    search_paths: Vec<PathBuf>,
}

impl LocalLocator {
    /// Create a new LocalLocator
    ///
    /// # Arguments
    /// * `storage_root` - Root directory for stored files (e.g., "/var/lib/fileshelf/files")
    /// * `search_paths` - Locations searched in order by [`PathLocator::locate`]
    pub fn new(storage_root: impl Into<PathBuf>, search_paths: Vec<PathBuf>) -> Self {
        LocalLocator {
            storage_root: storage_root.into(),
            search_paths,
        }
    }

    pub fn from_config(config: &FilesConfig) -> Self {
        Self::new(config.storage_path.clone(), config.search_paths.clone())
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn with_extension(path: &str, extension: &str) -> String {
        if extension.is_empty() || !path_extension(path).is_empty() {
            path.to_string()
        } else {
            format!("{}.{}", path, extension)
        }
    }
}

impl PathLocator for LocalLocator {
    fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    fn storage_path(&self, name: &str) -> PathBuf {
        join_relative(&self.storage_root, name)
    }

    fn locate(&self, path: &str, extension: &str) -> Option<PathBuf> {
        let name = Self::with_extension(path, extension);

        let candidate = Path::new(&name);
        if candidate.is_absolute() {
            return candidate
                .is_file()
                .then(|| canonicalize_or_raw(candidate.to_path_buf()));
        }

        for root in &self.search_paths {
            let candidate = root.join(&name);
            if candidate.is_file() {
                tracing::debug!(
                    path = %name,
                    found = %candidate.display(),
                    "Located file in search path"
                );
                return Some(canonicalize_or_raw(candidate));
            }
        }

        tracing::debug!(
            path = %name,
            search_paths = self.search_paths.len(),
            "File not found in any search path"
        );
        None
    }
}
