//! Path locator trait
//!
//! This module defines the PathLocator trait consumed by the file resolver.

use std::path::{Path, PathBuf};

/// Maps stored names to filesystem paths.
///
/// Implementations never fail: a path is returned even for a name that does not
/// exist on disk, and `locate` reports "nowhere" as `None`.
pub trait PathLocator: Send + Sync {
    /// Root directory stored names are relative to
    fn storage_root(&self) -> &Path;

    /// Storage root joined with a stored relative name (not canonicalized)
    fn storage_path(&self, name: &str) -> PathBuf;

    /// Search the configured locations for `path`, appending `.{extension}` when
    /// the path has no extension of its own. Returns the first regular file found.
    fn locate(&self, path: &str, extension: &str) -> Option<PathBuf>;
}
