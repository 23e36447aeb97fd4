//! Data models for file metadata
//!
//! Each sub-module represents a specific feature area.

mod export;
mod extension;
mod file;

pub use export::*;
pub use extension::*;
pub use file::*;
