//! Fileshelf Services Library
//!
//! This crate resolves file records against the filesystem: stored paths,
//! extension detection, thumbnails with a default fallback, and the export
//! handlers that apply to a file.

pub mod mime;
pub mod object;
pub mod resolver;
pub mod thumbnail;

// Re-export commonly used types
pub use mime::{DefaultMimeRegistry, MimeRegistry};
pub use object::FileObject;
pub use resolver::{FileCard, FileResolver};
pub use thumbnail::DefaultThumbnail;
