use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::IndexError;
use crate::category::Category;

/// Reference file names shipped with the service. Categories come from the
/// file name prefix (see [`Category::from_file_prefix`]).
pub const BUILTIN_REFERENCE_FILES: [&str; 23] = [
    "plastic_bag1.jpg",
    "plastic_bag2.jpg",
    "plastic_bag3.jpg",
    "plastic_bag4.jpg",
    "plastic_bag5.jpg",
    "plastic_bag6.jpg",
    "plastic_bottle1.jpg",
    "lithium_battery1.jpg",
    "lithium_battery2.jpg",
    "lithium_battery3.jpg",
    "lithium_battery4.jpg",
    "lithium_battery5.jpg",
    "lithium_battery6.jpg",
    "lithium_battery7.jpg",
    "aerosol_spray1.jpg",
    "aerosol_spray2.jpg",
    "aerosol_spray3.jpg",
    "aerosol_spray4.jpg",
    "aerosol_spray5.jpg",
    "aerosol_spray6.jpg",
    "aerosol_spray7.jpg",
    "aerosol_spray8.jpg",
    "aerosol_spray10.jpg",
];

/// A reference image and the category it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    pub path: PathBuf,
    pub category: Category,
}

/// Ordered list of reference images. Order matters: on a hash collision the
/// later entry wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    entries: Vec<ReferenceImage>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    images: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    file: PathBuf,
    category: Category,
}

impl ReferenceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in reference list resolved against `dir`.
    pub fn builtin<P: AsRef<Path>>(dir: P) -> Self {
        Self::from_file_names(dir, BUILTIN_REFERENCE_FILES)
    }

    /// Builds a catalog from file names using the prefix convention. Names
    /// that match no known prefix are left out.
    pub fn from_file_names<P, I, S>(dir: P, names: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = dir.as_ref();
        let mut catalog = Self::new();
        for name in names {
            let name = name.as_ref();
            match Category::from_file_prefix(name) {
                Some(category) => catalog.push(dir.join(name), category),
                None => log::warn!("Skipping reference file with unknown prefix: {}", name),
            }
        }
        catalog
    }

    /// Reads an explicit JSON manifest:
    ///
    /// ```json
    /// { "images": [ { "file": "battery_01.jpg", "category": "lithium battery" } ] }
    /// ```
    ///
    /// Relative paths are resolved against the manifest's directory.
    pub fn from_manifest<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| IndexError::Manifest {
            path: path.to_path_buf(),
            reason: source.to_string(),
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse_manifest(&raw, base).map_err(|reason| IndexError::Manifest {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse_manifest(raw: &str, base: &Path) -> Result<Self, String> {
        let manifest: Manifest = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        let mut catalog = Self::new();
        for entry in manifest.images {
            let path = if entry.file.is_absolute() { entry.file } else { base.join(entry.file) };
            catalog.push(path, entry.category);
        }
        Ok(catalog)
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, category: Category) {
        self.entries.push(ReferenceImage {
            path: path.into(),
            category,
        });
    }

    pub fn entries(&self) -> &[ReferenceImage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
