//! Resource resolution - mapping logical asset names to file paths.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

pub trait Resolver {
    fn resolve_image(&self, logical: &str) -> Option<PathBuf> {
        let _ = logical;
        None
    }

    fn resolve_music(&self, logical: &str) -> Option<PathBuf> {
        let _ = logical;
        None
    }
}

/// Resolves logical names by probing conventional subdirectories of a base
/// directory with known extensions.
pub struct DirResolver {
    pub base_dir: PathBuf,
}

impl DirResolver {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn find_file(&self, subdir: &str, logical: &str, extensions: &[&str]) -> Option<PathBuf> {
        let dir = self.base_dir.join(subdir);

        for ext in extensions {
            let path = dir.join(format!("{logical}{ext}"));
            if path.exists() {
                return Some(path);
            }
        }

        None
    }
}

impl Resolver for DirResolver {
    fn resolve_image(&self, logical: &str) -> Option<PathBuf> {
        self.find_file("images", logical, &[".png", ".jpg", ".webp"])
    }

    fn resolve_music(&self, logical: &str) -> Option<PathBuf> {
        self.find_file("music", logical, &[".ogg", ".mp3", ".wav"])
    }
}

/// Memoizes another resolver's answers, including misses.
///
/// Scene images resolve once per frame otherwise, and resolution probes the
/// filesystem; caching keeps the render loop off the disk.
pub struct CachedResolver<R> {
    inner: R,
    images: RefCell<HashMap<String, Option<PathBuf>>>,
    music: RefCell<HashMap<String, Option<PathBuf>>>,
}

impl<R: Resolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            images: RefCell::new(HashMap::new()),
            music: RefCell::new(HashMap::new()),
        }
    }
}

impl<R: Resolver> Resolver for CachedResolver<R> {
    fn resolve_image(&self, logical: &str) -> Option<PathBuf> {
        self.images
            .borrow_mut()
            .entry(logical.to_string())
            .or_insert_with(|| self.inner.resolve_image(logical))
            .clone()
    }

    fn resolve_music(&self, logical: &str) -> Option<PathBuf> {
        self.music
            .borrow_mut()
            .entry(logical.to_string())
            .or_insert_with(|| self.inner.resolve_music(logical))
            .clone()
    }
}
