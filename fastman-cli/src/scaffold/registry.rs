//! Module registry scan
//!
//! Read-only inventory of the modules already generated under a base
//! directory. Every immediate subdirectory is reported; completeness is a
//! plain file count against the template catalog, so an unrelated directory
//! that happens to hold eight files is reported as a complete module.

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::templates;

/// A module directory found by [`ModuleRegistry::scan`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Directory name
    pub module_name: String,
    /// Path of the module directory
    pub path: PathBuf,
    /// Regular files directly inside the directory
    pub file_count: usize,
    /// `file_count` equals the catalog size
    pub is_complete: bool,
    /// Catalog files not present in the directory
    pub missing_files: Vec<&'static str>,
}

/// Scanner over a base directory of generated modules
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    base_dir: PathBuf,
}

impl ModuleRegistry {
    /// Create a registry rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Root directory being scanned
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// List module directories, sorted by name
    ///
    /// A missing base directory yields an empty list. Entries that cannot be
    /// read are skipped.
    #[must_use]
    pub fn scan(&self) -> Vec<ModuleDescriptor> {
        if !self.base_dir.is_dir() {
            return Vec::new();
        }

        let mut modules: Vec<_> = WalkDir::new(&self.base_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| describe(entry.path()))
            .collect();

        modules.sort_by(|a, b| a.module_name.cmp(&b.module_name));
        modules
    }
}

/// Scan `base_dir` for generated modules
#[must_use]
pub fn scan(base_dir: &Path) -> Vec<ModuleDescriptor> {
    ModuleRegistry::new(base_dir).scan()
}

fn describe(dir: &Path) -> ModuleDescriptor {
    let file_names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    let missing_files = templates::file_names()
        .filter(|expected| !file_names.iter().any(|name| name == expected))
        .collect();

    let file_count = file_names.len();

    ModuleDescriptor {
        module_name: dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: dir.to_path_buf(),
        file_count,
        is_complete: file_count == templates::EXPECTED_FILE_COUNT,
        missing_files,
    }
}
