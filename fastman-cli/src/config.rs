//! Configuration management for fastman
//!
//! Configuration is layered with clear precedence:
//!
//! 1. Command-line flags (`--dir`, `-v`), applied by the caller
//! 2. Environment variables (`FASTMAN_` prefix)
//! 3. `./fastman.toml`, or the file passed with `--config`
//! 4. Hardcoded defaults
//!
//! # Example Configuration
//!
//! ```toml
//! # fastman.toml
//! apps_dir = "app"
//! log_filter = "warn"
//! log_format = "pretty"
//! ```

use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// fastman configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastmanConfig {
    /// Directory holding generated modules
    pub apps_dir: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_filter: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for FastmanConfig {
    fn default() -> Self {
        Self {
            apps_dir: PathBuf::from("app"),
            log_filter: "warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl FastmanConfig {
    /// Configuration file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "fastman.toml";

    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "FASTMAN_";

    /// Load configuration from `./fastman.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::DEFAULT_FILE)
    }

    /// Load configuration from a specific file and the environment
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment value has the wrong shape.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(Self::ENV_PREFIX))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Load configuration, falling back to defaults when a source is invalid
    ///
    /// The load error is handed back so the caller can report it once
    /// logging is up.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Directory to use for a command, honouring a `--dir` override
    #[must_use]
    pub fn apps_dir_or(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override.map_or_else(|| self.apps_dir.clone(), Path::to_path_buf)
    }
}
