//! Error types for the scaffolding engine

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Engine error type
///
/// None of these are transient: the CLI reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The raw name cannot be turned into a module identifier
    #[error("Invalid module name '{input}': {reason}")]
    InvalidName {
        /// Exactly what the user typed
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The target module directory is already populated and `force` was not set
    #[error("Module '{module_name}' already exists at {}", path.display())]
    ModuleAlreadyExists {
        /// Canonical module name
        module_name: String,
        /// Existing module directory
        path: PathBuf,
    },

    /// Underlying I/O failure while materializing a module
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        /// Path that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn invalid_name(input: &str, reason: &'static str) -> Self {
        Self::InvalidName {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;
