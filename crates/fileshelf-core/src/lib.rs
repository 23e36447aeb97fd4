//! Fileshelf Core Library
//!
//! This crate provides the file record model, export descriptors, error types and
//! configuration shared by all fileshelf components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod path_utils;

// Re-export commonly used types
pub use config::FilesConfig;
pub use error::{ErrorMetadata, FileError, FileResult, LogLevel};
pub use models::{ExportInfo, ExtensionMethod, FileRecord};
pub use path_utils::path_extension;
