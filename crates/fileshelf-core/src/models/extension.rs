use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FileError;

/// Strategy used to determine a file's extension.
///
/// `CASCADE` is the order strategies are tried in when no single method is
/// requested. `Type` and `Mime` depend on the stored MIME type being trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMethod {
    /// Map the stored MIME type to its canonical extension.
    Type,
    /// Sniff the physical file's content.
    Mime,
    ClientName,
    LocalName,
    FileName,
}

impl ExtensionMethod {
    pub const CASCADE: [ExtensionMethod; 5] = [
        ExtensionMethod::Type,
        ExtensionMethod::Mime,
        ExtensionMethod::ClientName,
        ExtensionMethod::LocalName,
        ExtensionMethod::FileName,
    ];

    pub fn is_content_based(self) -> bool {
        matches!(self, ExtensionMethod::Type | ExtensionMethod::Mime)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtensionMethod::Type => "type",
            ExtensionMethod::Mime => "mime",
            ExtensionMethod::ClientName => "clientname",
            ExtensionMethod::LocalName => "localname",
            ExtensionMethod::FileName => "filename",
        }
    }

    /// Parse an optional selector where an empty string means "every method".
    pub fn parse_selector(selector: &str) -> Result<Option<Self>, FileError> {
        let selector = selector.trim();
        if selector.is_empty() {
            Ok(None)
        } else {
            selector.parse().map(Some)
        }
    }
}

impl FromStr for ExtensionMethod {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "type" => Ok(ExtensionMethod::Type),
            "mime" => Ok(ExtensionMethod::Mime),
            "clientname" => Ok(ExtensionMethod::ClientName),
            "localname" => Ok(ExtensionMethod::LocalName),
            "filename" => Ok(ExtensionMethod::FileName),
            _ => Err(FileError::InvalidInput(format!(
                "Unknown extension method: {}",
                s
            ))),
        }
    }
}

impl Display for ExtensionMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
