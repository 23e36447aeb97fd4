//! Shared constants

/// MIME type stored when the uploader's type could not be trusted.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension token an export handler declares to apply to every file.
pub const WILDCARD_EXTENSION: &str = "*";

/// Subfolder of the storage root holding per-file thumbnails.
pub const DEFAULT_THUMBNAILS_DIR: &str = "thumbnails";
