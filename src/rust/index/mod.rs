//! Exact-match catalog of known reference images.
//!
//! The index maps a perceptual hash to the category of the reference image it
//! was computed from. It is built once at startup and never mutated while
//! serving, so it can be shared across request threads without locking.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use image::RgbImage;

use crate::category::Category;
use crate::imaging::decode_rgb_bounded;

mod catalog;
mod hash;

pub use catalog::{ReferenceCatalog, ReferenceImage, BUILTIN_REFERENCE_FILES};
pub use hash::{perceptual_hash, HASH_SIDE};

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Reference file not found: {0}")]
    MissingReferenceFile(PathBuf),
    #[error("Could not load reference file {path}: {reason}")]
    UnreadableReferenceFile { path: PathBuf, reason: String },
    #[error("Invalid reference manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },
}

/// Counters describing how an index build went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub loaded: usize,
    pub missing: usize,
    pub unreadable: usize,
    /// Entries that replaced a mapping to a different category.
    pub collisions: usize,
}

#[derive(Debug, Clone, Default)]
pub struct KnownImageIndex {
    entries: HashMap<String, Category>,
}

impl KnownImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes every reference image of `catalog`. Missing and unreadable
    /// files are logged and skipped; they never fail the build.
    pub fn build(catalog: &ReferenceCatalog) -> (Self, IndexReport) {
        let mut index = Self::new();
        let mut report = IndexReport::default();

        for reference in catalog.entries() {
            match Self::load_reference(reference) {
                Ok(image) => {
                    if index.insert_image(&image, reference.category) {
                        report.collisions += 1;
                    }
                    report.loaded += 1;
                }
                Err(e @ IndexError::MissingReferenceFile(_)) => {
                    log::warn!("{}", e);
                    report.missing += 1;
                }
                Err(e) => {
                    log::warn!("{}", e);
                    report.unreadable += 1;
                }
            }
        }

        log::info!(
            "Known-image index built: {} loaded, {} missing, {} unreadable, {} collisions ({} distinct hashes)",
            report.loaded,
            report.missing,
            report.unreadable,
            report.collisions,
            index.len()
        );
        (index, report)
    }

    fn load_reference(reference: &ReferenceImage) -> Result<RgbImage, IndexError> {
        if !reference.path.exists() {
            return Err(IndexError::MissingReferenceFile(reference.path.clone()));
        }
        let unreadable = |reason: String| IndexError::UnreadableReferenceFile {
            path: reference.path.clone(),
            reason,
        };
        let bytes = fs::read(&reference.path).map_err(|e| unreadable(e.to_string()))?;
        decode_rgb_bounded(&bytes).map_err(|e| unreadable(e.to_string()))
    }

    /// Hashes `image` and maps the hash to `category`. Returns `true` when
    /// this replaced a mapping to a different category.
    pub fn insert_image(&mut self, image: &RgbImage, category: Category) -> bool {
        self.insert(perceptual_hash(image), category)
    }

    /// Last write wins. Returns `true` when an existing mapping to a
    /// different category was overwritten.
    pub fn insert(&mut self, hash: String, category: Category) -> bool {
        match self.entries.insert(hash.clone(), category) {
            Some(previous) if previous != category => {
                log::warn!(
                    "Perceptual hash {} was mapped to '{}', now '{}'",
                    hash,
                    previous,
                    category
                );
                true
            }
            _ => false,
        }
    }

    pub fn lookup(&self, hash: &str) -> Option<Category> {
        self.entries.get(hash).copied()
    }

    pub fn lookup_image(&self, image: &RgbImage) -> Option<Category> {
        self.lookup(&perceptual_hash(image))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
