//! Export handlers
//!
//! Export handlers turn a stored file into something a user can take away
//! (a download, an inline preview, ...). This crate only models which handlers
//! exist and which extensions they accept; the response mechanics live with the
//! HTTP layer.

pub mod handler;
pub mod registry;

pub use handler::{DescriptorExport, DownloadExport, ExportHandler, PreviewExport};
pub use registry::HandlerRegistry;
