//! MIME type ↔ extension mapping and content sniffing

use fileshelf_core::constants::UNKNOWN_CONTENT_TYPE;

use crate::object::FileObject;

/// Maps MIME types to extensions and guesses extensions from file content.
pub trait MimeRegistry: Send + Sync {
    /// Canonical extension for a MIME type string, without the dot.
    fn extension_for_type(&self, mime_type: &str) -> Option<String>;

    /// Extension suggested by the file's leading bytes, ignoring any stored type.
    fn guess_extension(&self, file: &mut FileObject) -> Option<String>;
}

/// `mime_guess` for type lookups and `infer` for signatures, with a small table
/// pinning the extension for types that map to several.
#[derive(Debug, Clone)]
pub struct DefaultMimeRegistry {
    sniff_limit: usize,
}

impl DefaultMimeRegistry {
    /// Preferred extension per type; consulted before `mime_guess`, whose
    /// extension lists are not ordered by popularity.
    const PREFERRED_EXTENSIONS: &'static [(&'static str, &'static str)] = &[
        ("image/jpeg", "jpg"),
        ("image/pjpeg", "jpg"),
        ("image/png", "png"),
        ("image/gif", "gif"),
        ("image/webp", "webp"),
        ("image/bmp", "bmp"),
        ("image/svg+xml", "svg"),
        ("image/tiff", "tiff"),
        ("image/vnd.adobe.photoshop", "psd"),
        ("application/pdf", "pdf"),
        ("application/zip", "zip"),
        ("application/json", "json"),
        ("application/xml", "xml"),
        ("application/msword", "doc"),
        (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "docx",
        ),
        ("application/vnd.ms-excel", "xls"),
        (
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "xlsx",
        ),
        ("text/plain", "txt"),
        ("text/csv", "csv"),
        ("text/html", "html"),
        ("text/markdown", "md"),
        ("audio/mpeg", "mp3"),
        ("audio/wav", "wav"),
        ("video/mp4", "mp4"),
        ("video/quicktime", "mov"),
        ("video/webm", "webm"),
    ];

    pub fn new(sniff_limit: usize) -> Self {
        Self { sniff_limit }
    }

    pub fn sniff_limit(&self) -> usize {
        self.sniff_limit
    }

    /// Lowercased essence of a MIME type (parameters such as `charset` dropped).
    fn essence(mime_type: &str) -> String {
        mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }
}

impl Default for DefaultMimeRegistry {
    fn default() -> Self {
        Self::new(8 * 1024)
    }
}

impl MimeRegistry for DefaultMimeRegistry {
    fn extension_for_type(&self, mime_type: &str) -> Option<String> {
        let essence = Self::essence(mime_type);
        if essence.is_empty() || essence == UNKNOWN_CONTENT_TYPE {
            return None;
        }

        if let Some((_, ext)) = Self::PREFERRED_EXTENSIONS
            .iter()
            .find(|(mime, _)| *mime == essence)
        {
            return Some((*ext).to_string());
        }

        mime_guess::get_mime_extensions_str(&essence)
            .and_then(|exts| exts.first())
            .map(|ext| (*ext).to_string())
    }

    fn guess_extension(&self, file: &mut FileObject) -> Option<String> {
        let head = match file.read_head(self.sniff_limit) {
            Ok(head) => head,
            Err(e) => {
                tracing::debug!(
                    path = %file.path().display(),
                    error = %e,
                    "Could not read file for content sniffing"
                );
                return None;
            }
        };

        infer::get(&head)
            .map(|kind| kind.extension().to_string())
            .or_else(|| looks_like_text(&head).then(|| "txt".to_string()))
    }
}

/// Non-empty, NUL-free UTF-8. A multi-byte sequence cut off by the sniff limit
/// still counts as text.
fn looks_like_text(head: &[u8]) -> bool {
    if head.is_empty() || head.contains(&0) {
        return false;
    }
    match std::str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}
