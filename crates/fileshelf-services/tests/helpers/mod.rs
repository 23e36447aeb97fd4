//! Test helpers: a temporary storage layout and resolvers built on it.
//!
//! Run from workspace root: `cargo test -p fileshelf-services`.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fileshelf_core::FilesConfig;
use fileshelf_exports::HandlerRegistry;
use fileshelf_services::{
    DefaultMimeRegistry, DefaultThumbnail, FileObject, FileResolver, MimeRegistry,
};
use fileshelf_storage::LocalLocator;
use tempfile::TempDir;

pub const DEFAULT_THUMBNAIL: &str = "assets/unavailable.jpg";

/// Temporary directory holding `files/` (storage root, with `thumbnails/`) and
/// `app/` (the only search location for the default thumbnail).
pub struct TestStore {
    pub dir: TempDir,
    pub config: FilesConfig,
}

impl TestStore {
    /// Layout with the default thumbnail present.
    pub fn new() -> Self {
        let store = Self::without_default_thumbnail();
        store.write_default_thumbnail();
        store
    }

    /// Layout whose default thumbnail cannot be found.
    pub fn without_default_thumbnail() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("files");
        fs::create_dir_all(storage.join("thumbnails")).unwrap();
        fs::create_dir_all(dir.path().join("app")).unwrap();

        let config = FilesConfig {
            storage_path: storage,
            default_thumbnail: DEFAULT_THUMBNAIL.to_string(),
            search_paths: vec![dir.path().join("app")],
            ..FilesConfig::default()
        };

        Self { dir, config }
    }

    pub fn storage_root(&self) -> &Path {
        &self.config.storage_path
    }

    pub fn write_default_thumbnail(&self) -> PathBuf {
        let path = self.dir.path().join("app").join(DEFAULT_THUMBNAIL);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, fixtures::create_minimal_png()).unwrap();
        fs::canonicalize(path).unwrap()
    }

    pub fn default_thumbnail_path(&self) -> PathBuf {
        fs::canonicalize(self.dir.path().join("app").join(DEFAULT_THUMBNAIL)).unwrap()
    }

    /// Store bytes under `localname` and return the canonical path.
    pub fn write_file(&self, localname: &str, data: &[u8]) -> PathBuf {
        let path = self.storage_root().join(localname);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, data).unwrap();
        fs::canonicalize(path).unwrap()
    }

    pub fn write_thumbnail(&self, name: &str) -> PathBuf {
        self.write_file(
            &format!("thumbnails/{}", name),
            &fixtures::create_minimal_png(),
        )
    }

    /// Resolver with its own default thumbnail cache, so tests stay independent.
    pub fn resolver(&self, registry: HandlerRegistry) -> FileResolver {
        self.resolver_with_mimes(registry, Arc::new(DefaultMimeRegistry::default()))
    }

    pub fn resolver_with_mimes(
        &self,
        registry: HandlerRegistry,
        mimes: Arc<dyn MimeRegistry>,
    ) -> FileResolver {
        FileResolver::new(
            Arc::new(self.config.clone()),
            Arc::new(LocalLocator::from_config(&self.config)),
            mimes,
            Arc::new(registry),
        )
        .with_default_thumbnail(Arc::new(DefaultThumbnail::new()))
    }
}

/// MIME registry that counts calls before delegating to the default one.
#[derive(Default)]
pub struct CountingMimes {
    inner: DefaultMimeRegistry,
    pub type_lookups: AtomicUsize,
    pub content_guesses: AtomicUsize,
}

impl CountingMimes {
    pub fn type_lookups(&self) -> usize {
        self.type_lookups.load(Ordering::SeqCst)
    }

    pub fn content_guesses(&self) -> usize {
        self.content_guesses.load(Ordering::SeqCst)
    }
}

impl MimeRegistry for CountingMimes {
    fn extension_for_type(&self, mime_type: &str) -> Option<String> {
        self.type_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.extension_for_type(mime_type)
    }

    fn guess_extension(&self, file: &mut FileObject) -> Option<String> {
        self.content_guesses.fetch_add(1, Ordering::SeqCst);
        self.inner.guess_extension(file)
    }
}
