//! Handler registry for looking up export handlers by extension

use anyhow::{Context, Result};
use std::sync::Arc;

use fileshelf_core::ExportInfo;

use crate::handler::{DescriptorExport, DownloadExport, ExportHandler, PreviewExport};

/// Ordered catalog of export handlers.
///
/// Registration happens at startup through `&mut self`; afterwards the registry
/// is shared read-only (typically behind an `Arc`), so lookups need no locking.
/// Query results follow registration order.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn ExportHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in handlers: preview, then download.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PreviewExport));
        registry.register(Arc::new(DownloadExport));
        registry
    }

    /// Register a handler. Re-registering an id replaces the earlier handler
    /// and keeps its position.
    pub fn register(&mut self, handler: Arc<dyn ExportHandler>) {
        match self.handlers.iter().position(|h| h.id() == handler.id()) {
            Some(idx) => {
                tracing::debug!(handler = %handler.id(), "Replacing export handler");
                self.handlers[idx] = handler;
            }
            None => {
                tracing::debug!(handler = %handler.id(), "Registering export handler");
                self.handlers.push(handler);
            }
        }
    }

    /// Register every descriptor of a JSON manifest (an array of handler
    /// descriptors) as a [`DescriptorExport`].
    pub fn register_manifest(&mut self, manifest: &str) -> Result<usize> {
        let descriptors: Vec<ExportInfo> =
            serde_json::from_str(manifest).context("Invalid export handler manifest")?;

        for info in &descriptors {
            if info.id.trim().is_empty() {
                anyhow::bail!("Export handler manifest entry has an empty id");
            }
            if info.extensions.is_empty() {
                anyhow::bail!("Export handler '{}' declares no extensions", info.id);
            }
        }

        let count = descriptors.len();
        for info in descriptors {
            self.register(Arc::new(DescriptorExport::new(info)));
        }
        Ok(count)
    }

    /// Get a handler by id
    pub fn get(&self, id: &str) -> Result<Arc<dyn ExportHandler>> {
        self.handlers
            .iter()
            .find(|h| h.id() == id)
            .cloned()
            .with_context(|| format!("Export handler '{}' not found", id))
    }

    /// Check if a handler is registered
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.iter().any(|h| h.id() == id)
    }

    /// List all registered handlers
    pub fn list(&self) -> Vec<ExportInfo> {
        self.handlers.iter().map(|h| h.info().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handlers whose extension set contains `extension` literally
    pub fn find_by_extension(&self, extension: &str) -> Vec<Arc<dyn ExportHandler>> {
        self.handlers
            .iter()
            .filter(|h| h.supports(extension))
            .cloned()
            .collect()
    }

    /// Handlers declaring the wildcard extension
    pub fn find_wildcard(&self) -> Vec<Arc<dyn ExportHandler>> {
        self.handlers
            .iter()
            .filter(|h| h.is_wildcard())
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| h.id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, extensions: &[&str]) -> Arc<dyn ExportHandler> {
        Arc::new(DescriptorExport::new(ExportInfo::new(
            id,
            id,
            extensions.iter().copied(),
        )))
    }

    fn ids(handlers: &[Arc<dyn ExportHandler>]) -> Vec<&str> {
        handlers.iter().map(|h| h.id()).collect()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
        assert!(!registry.contains("download"));
    }

    #[test]
    fn test_with_defaults() {
        let registry = HandlerRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("preview"));
        assert!(registry.contains("download"));
    }

    #[test]
    fn test_get_handler() {
        let registry = HandlerRegistry::with_defaults();
        assert_eq!(registry.get("download").unwrap().id(), "download");
    }

    #[test]
    fn test_get_nonexistent_handler() {
        let registry = HandlerRegistry::new();
        let result = registry.get("nonexistent");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Export handler 'nonexistent' not found"));
    }

    #[test]
    fn test_find_by_extension_keeps_registration_order() {
        let mut registry = HandlerRegistry::new();
        registry.register(descriptor("thumbs", &["jpg", "png"]));
        registry.register(descriptor("exif", &["jpg"]));
        registry.register(descriptor("pdf", &["pdf"]));

        assert_eq!(ids(&registry.find_by_extension("jpg")), vec!["thumbs", "exif"]);
        assert_eq!(ids(&registry.find_by_extension("pdf")), vec!["pdf"]);
        assert!(registry.find_by_extension("psd").is_empty());
    }

    #[test]
    fn test_find_wildcard() {
        let mut registry = HandlerRegistry::new();
        registry.register(descriptor("zip", &["*"]));
        registry.register(descriptor("preview", &["png"]));
        registry.register(descriptor("download", &["*", "png"]));

        assert_eq!(ids(&registry.find_wildcard()), vec!["zip", "download"]);
        // Wildcard handlers only match "png" when they list it literally.
        assert_eq!(
            ids(&registry.find_by_extension("png")),
            vec!["preview", "download"]
        );
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut registry = HandlerRegistry::new();
        registry.register(descriptor("a", &["txt"]));
        registry.register(descriptor("b", &["txt"]));
        registry.register(descriptor("a", &["md"]));

        assert_eq!(registry.len(), 2);
        assert_eq!(ids(&registry.find_by_extension("txt")), vec!["b"]);
        assert_eq!(registry.list()[0].extensions, vec!["md".to_string()]);
    }

    #[test]
    fn test_register_manifest() {
        let mut registry = HandlerRegistry::new();
        let count = registry
            .register_manifest(
                r#"[
                    {"id": "csv", "name": "Spreadsheet", "extensions": ["csv", "xlsx"]},
                    {"id": "zip", "name": "Zip", "description": "Archive", "extensions": ["*"]}
                ]"#,
            )
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(ids(&registry.find_by_extension("xlsx")), vec!["csv"]);
        assert_eq!(registry.get("zip").unwrap().info().description, "Archive");
    }

    #[test]
    fn test_register_manifest_rejects_bad_entries() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.register_manifest("not json").is_err());
        assert!(registry
            .register_manifest(r#"[{"id": "", "name": "x", "extensions": ["*"]}]"#)
            .is_err());
        let err = registry
            .register_manifest(r#"[{"id": "empty", "name": "x", "extensions": []}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("declares no extensions"));
        assert!(registry.is_empty());
    }
}
