//! Configuration module
//!
//! Storage layout and default-thumbnail settings, read from the environment.

use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_THUMBNAILS_DIR;

const STORAGE_PATH: &str = "writable/files";
const DEFAULT_THUMBNAIL: &str = "assets/unavailable.jpg";
const SEARCH_PATHS: &str = ".";
const SNIFF_LIMIT_BYTES: usize = 8 * 1024;

/// File storage configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilesConfig {
    /// Root directory that stored `localname`s are relative to.
    pub storage_path: PathBuf,
    /// Subfolder of `storage_path` holding per-file thumbnails.
    pub thumbnails_dir: String,
    /// Reference to the fallback thumbnail, relative to one of `search_paths`
    /// (or absolute).
    pub default_thumbnail: String,
    /// Locations searched, in order, when locating the default thumbnail.
    pub search_paths: Vec<PathBuf>,
    /// Upper bound on bytes read when sniffing a file's content.
    pub sniff_limit_bytes: usize,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(STORAGE_PATH),
            thumbnails_dir: DEFAULT_THUMBNAILS_DIR.to_string(),
            default_thumbnail: DEFAULT_THUMBNAIL.to_string(),
            search_paths: split_paths(SEARCH_PATHS),
            sniff_limit_bytes: SNIFF_LIMIT_BYTES,
        }
    }
}

fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

impl FilesConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. `from_env` passes
    /// the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = FilesConfig {
            storage_path: lookup("FILES_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(STORAGE_PATH)),
            thumbnails_dir: lookup("FILES_THUMBNAILS_DIR")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| DEFAULT_THUMBNAILS_DIR.to_string()),
            default_thumbnail: lookup("FILES_DEFAULT_THUMBNAIL")
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string()),
            search_paths: split_paths(
                &lookup("FILES_SEARCH_PATHS").unwrap_or_else(|| SEARCH_PATHS.to_string()),
            ),
            sniff_limit_bytes: match lookup("FILES_SNIFF_LIMIT_BYTES") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    anyhow::anyhow!("FILES_SNIFF_LIMIT_BYTES must be a valid number")
                })?,
                None => SNIFF_LIMIT_BYTES,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_path.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("FILES_STORAGE_PATH must not be empty"));
        }

        if self.thumbnails_dir.is_empty()
            || self.thumbnails_dir.contains(['/', '\\'])
            || self.thumbnails_dir == ".."
        {
            return Err(anyhow::anyhow!(
                "FILES_THUMBNAILS_DIR must be a single directory name"
            ));
        }

        if self.default_thumbnail.is_empty() {
            return Err(anyhow::anyhow!("FILES_DEFAULT_THUMBNAIL must not be empty"));
        }

        if self.search_paths.is_empty() {
            return Err(anyhow::anyhow!(
                "FILES_SEARCH_PATHS must list at least one location"
            ));
        }

        if self.sniff_limit_bytes == 0 {
            return Err(anyhow::anyhow!(
                "FILES_SNIFF_LIMIT_BYTES must be greater than zero"
            ));
        }

        Ok(())
    }

    /// Directory holding per-file thumbnails.
    pub fn thumbnails_path(&self) -> PathBuf {
        self.storage_path.join(&self.thumbnails_dir)
    }
}
