//! Export handler trait and built-in handlers

use std::fmt::Debug;
use std::sync::LazyLock;

use fileshelf_core::constants::WILDCARD_EXTENSION;
use fileshelf_core::ExportInfo;

/// Export handler trait
///
/// Handlers declare the extensions they accept through [`ExportInfo`]. The
/// registry filters on `supports` and `is_wildcard`, so handlers with special
/// matching rules can override those.
pub trait ExportHandler: Send + Sync + Debug {
    fn info(&self) -> &ExportInfo;

    fn id(&self) -> &str {
        &self.info().id
    }

    fn supports(&self, extension: &str) -> bool {
        self.info().supports(extension)
    }

    fn is_wildcard(&self) -> bool {
        self.info().is_wildcard()
    }
}

/// Sends the original bytes; applies to every file.
#[derive(Debug)]
pub struct DownloadExport;

static DOWNLOAD_INFO: LazyLock<ExportInfo> = LazyLock::new(|| {
    ExportInfo::new("download", "Download", [WILDCARD_EXTENSION])
        .with_description("Download the original file")
});

impl ExportHandler for DownloadExport {
    fn info(&self) -> &ExportInfo {
        &DOWNLOAD_INFO
    }
}

/// Renders the file inline in the browser.
#[derive(Debug)]
pub struct PreviewExport;

static PREVIEW_INFO: LazyLock<ExportInfo> = LazyLock::new(|| {
    ExportInfo::new(
        "preview",
        "Preview",
        [
            "bmp", "gif", "jpeg", "jpg", "png", "svg", "webp", "pdf", "txt",
        ],
    )
    .with_description("Open the file in the browser")
});

impl ExportHandler for PreviewExport {
    fn info(&self) -> &ExportInfo {
        &PREVIEW_INFO
    }
}

/// Handler defined purely by its descriptor, e.g. loaded from a manifest.
#[derive(Debug, Clone)]
pub struct DescriptorExport {
    info: ExportInfo,
}

impl DescriptorExport {
    pub fn new(info: ExportInfo) -> Self {
        Self { info }
    }
}

impl From<ExportInfo> for DescriptorExport {
    fn from(info: ExportInfo) -> Self {
        Self::new(info)
    }
}

impl ExportHandler for DescriptorExport {
    fn info(&self) -> &ExportInfo {
        &self.info
    }
}
