use serde::{Deserialize, Serialize};

use crate::constants::WILDCARD_EXTENSION;

/// Export handler information for registry listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInfo {
    /// Unique handler identifier (e.g., "download")
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Extensions the handler accepts; `"*"` accepts every file.
    pub extensions: Vec<String>,
}

impl ExportInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Literal membership: a wildcard handler does not "support" `psd` here,
    /// it is found through [`ExportInfo::is_wildcard`] instead.
    pub fn supports(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }

    pub fn is_wildcard(&self) -> bool {
        self.supports(WILDCARD_EXTENSION)
    }
}
