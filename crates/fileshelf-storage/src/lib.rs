//! Fileshelf Storage Library
//!
//! This crate maps stored file names onto the local filesystem and locates
//! configured resources (such as the default thumbnail) in search locations.
//!
//! # Path layout
//!
//! - **Stored files**: `{storage_path}/{localname}`
//! - **Thumbnails**: `{storage_path}/{thumbnails_dir}/{thumbnail}`
//!
//! Leading separators in stored names are ignored so a name can never replace
//! the storage root.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalLocator;
pub use traits::PathLocator;
