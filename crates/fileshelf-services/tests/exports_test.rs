//! Export handler selection tests.
//!
//! Run with: `cargo test -p fileshelf-services --test exports_test`

mod helpers;

use std::sync::Arc;

use fileshelf_core::{ExportInfo, FileRecord};
use fileshelf_exports::{DescriptorExport, HandlerRegistry};
use helpers::TestStore;

fn handler(id: &str, extensions: &[&str]) -> Arc<DescriptorExport> {
    Arc::new(DescriptorExport::new(ExportInfo::new(
        id,
        id,
        extensions.iter().copied(),
    )))
}

fn registry(handlers: &[(&str, &[&str])]) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    for (id, extensions) in handlers {
        registry.register(handler(id, extensions));
    }
    registry
}

fn record(localname: &str) -> FileRecord {
    FileRecord::new(localname, "application/octet-stream")
}

#[test]
fn test_specific_handlers_come_before_wildcards() {
    let store = TestStore::new();
    let resolver = store.resolver(registry(&[
        ("download", &["*"]),
        ("thumbs", &["jpg", "png"]),
        ("exif", &["jpg"]),
    ]));

    assert_eq!(
        resolver.exports(&record("photo.jpg"), true),
        vec!["thumbs", "exif", "download"]
    );
}

#[test]
fn test_handler_in_both_groups_is_listed_twice() {
    let store = TestStore::new();
    let resolver = store.resolver(registry(&[("archive", &["*", "zip"])]));

    assert_eq!(
        resolver.exports(&record("bundle.zip"), true),
        vec!["archive", "archive"]
    );
}

#[test]
fn test_unmatched_extension_gets_only_wildcards() {
    let store = TestStore::new();
    let resolver = store.resolver(HandlerRegistry::with_defaults());

    assert_eq!(resolver.exports(&record("layers.psd"), true), vec!["download"]);
    assert!(resolver.exports(&record("layers.psd"), false).is_empty());
}

#[test]
fn test_without_wildcards() {
    let store = TestStore::new();
    let resolver = store.resolver(HandlerRegistry::with_defaults());

    assert_eq!(resolver.exports(&record("scan.png"), false), vec!["preview"]);
    assert_eq!(
        resolver.exports(&record("scan.png"), true),
        vec!["preview", "download"]
    );
}

#[test]
fn test_no_extension_still_lists_wildcards() {
    let store = TestStore::new();
    let resolver = store.resolver(HandlerRegistry::with_defaults());

    assert_eq!(resolver.exports(&record("README"), true), vec!["download"]);
    assert!(resolver.exports(&record("README"), false).is_empty());
}

#[test]
fn test_manifest_handlers_take_part() {
    let store = TestStore::new();
    let mut handlers = HandlerRegistry::with_defaults();
    handlers
        .register_manifest(r#"[{"id": "ocr", "name": "Text recognition", "extensions": ["pdf", "png"]}]"#)
        .unwrap();
    let resolver = store.resolver(handlers);

    assert_eq!(
        resolver.exports(&record("invoice.pdf"), true),
        vec!["preview", "ocr", "download"]
    );
}

#[test]
fn test_empty_registry() {
    let store = TestStore::new();
    let resolver = store.resolver(HandlerRegistry::new());

    assert!(resolver.exports(&record("photo.jpg"), true).is_empty());
}
