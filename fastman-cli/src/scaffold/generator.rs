//! Module writer
//!
//! Materializes the template catalog for one [`ModuleSpec`] under
//! `<base_dir>/<module_name>/`.
//!
//! The existence check runs before anything is written, so a refused run
//! leaves the filesystem untouched. The multi-file write itself is not
//! transactional: if one file fails, the files written before it stay on
//! disk and the error names the failing path.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::ModuleSpec;
use crate::error::{Result, ScaffoldError};
use crate::templates::{self, FileKind};

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    /// The file did not exist before
    Created,
    /// An existing file was replaced (only with `force`)
    Overwritten,
}

/// A file written by [`ModuleWriter::write`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    /// Catalog entry
    pub kind: FileKind,
    /// Path relative to the module directory
    pub relative_path: &'static str,
    /// Created or overwritten
    pub outcome: FileOutcome,
}

/// Result of generating one module
#[derive(Debug, Clone, Serialize)]
pub struct WriteResult {
    /// Canonical `snake_case` name
    pub module_name: String,
    /// Canonical `PascalCase` name
    pub class_name: String,
    /// `<base_dir>/<module_name>`
    pub target_directory: PathBuf,
    /// Files in catalog order
    pub files: Vec<WrittenFile>,
}

impl WriteResult {
    /// Relative paths of the written files, in catalog order
    pub fn files_written(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().map(|f| f.relative_path)
    }

    /// Number of files written
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of files that replaced an existing file
    #[must_use]
    pub fn overwritten_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Overwritten)
            .count()
    }
}

/// Writes generated modules to disk
#[derive(Debug, Clone)]
pub struct ModuleWriter {
    base_dir: PathBuf,
    force: bool,
}

impl ModuleWriter {
    /// Create a writer targeting `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            force: false,
        }
    }

    /// Allow replacing the files of an already-populated module
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Directory that will hold the given module
    #[must_use]
    pub fn target_directory(&self, spec: &ModuleSpec) -> PathBuf {
        self.base_dir.join(&spec.module_name)
    }

    /// Generate and write every catalog file for `spec`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The module directory is non-empty and `force` is not set
    /// - The module directory cannot be created
    /// - A file cannot be written (earlier files are left in place)
    pub fn write(&self, spec: &ModuleSpec) -> Result<WriteResult> {
        let target = self.target_directory(spec);

        if !self.force && is_populated(&target)? {
            return Err(ScaffoldError::ModuleAlreadyExists {
                module_name: spec.module_name.clone(),
                path: target,
            });
        }

        fs::create_dir_all(&target).map_err(|e| ScaffoldError::file_write(&target, e))?;

        let mut files = Vec::with_capacity(templates::EXPECTED_FILE_COUNT);
        for file in templates::generate(spec) {
            let path = target.join(file.relative_path);
            let outcome = if path.exists() {
                FileOutcome::Overwritten
            } else {
                FileOutcome::Created
            };

            fs::write(&path, &file.content).map_err(|e| ScaffoldError::file_write(&path, e))?;

            files.push(WrittenFile {
                kind: file.kind,
                relative_path: file.relative_path,
                outcome,
            });
        }

        Ok(WriteResult {
            module_name: spec.module_name.clone(),
            class_name: spec.class_name.clone(),
            target_directory: target,
            files,
        })
    }
}

/// Write `spec` under `base_dir`
///
/// # Errors
///
/// See [`ModuleWriter::write`].
pub fn write(base_dir: &Path, spec: &ModuleSpec, force: bool) -> Result<WriteResult> {
    ModuleWriter::new(base_dir).force(force).write(spec)
}

fn is_populated(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    if !dir.is_dir() {
        // A plain file in the way counts as an occupied slot
        return Ok(true);
    }

    let mut entries = fs::read_dir(dir).map_err(|e| ScaffoldError::file_write(dir, e))?;
    Ok(entries.next().is_some())
}
