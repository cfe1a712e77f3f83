//! Observability (logging)
//!
//! Structured logging for the command layer. Events go to stderr so that the
//! reports printed on stdout (including `--json` output) stay machine-readable.

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Initialize the global `tracing` subscriber
///
/// `RUST_LOG` wins when set. Otherwise `verbosity` (the number of `-v`
/// flags) raises the configured filter, see [`filter_for`].
///
/// # Example
///
/// ```rust,no_run
/// use fastman_cli_lib::config::LogFormat;
/// use fastman_cli_lib::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init("warn", LogFormat::Pretty, 0)?;
/// tracing::info!("fastman started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is already set.
pub fn init(default_filter: &str, format: LogFormat, verbosity: u8) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_for(default_filter, verbosity))
            .with_context(|| format!("Invalid log filter: {default_filter}"))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("Failed to initialize logging")
}

/// Effective filter for a number of `-v` flags
///
/// The flags only ever make logging more verbose. A configured filter that is
/// a plain level keeps the more verbose of the two; a directive list keeps its
/// per-target directives and gets the flag level as its default.
#[must_use]
pub fn filter_for(default_filter: &str, verbosity: u8) -> String {
    let requested = match verbosity {
        0 => return default_filter.to_string(),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    match default_filter.trim().parse::<LevelFilter>() {
        Ok(configured) => level_name(configured.max(requested)),
        Err(_) => format!("{},{default_filter}", level_name(requested)),
    }
}

fn level_name(level: LevelFilter) -> String {
    level.to_string().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_without_flags_uses_config() {
        assert_eq!(filter_for("warn", 0), "warn");
        assert_eq!(filter_for("fastman_cli_lib=debug", 0), "fastman_cli_lib=debug");
    }

    #[test]
    fn test_verbose_flags_raise_level() {
        assert_eq!(filter_for("warn", 1), "info");
        assert_eq!(filter_for("warn", 2), "debug");
        assert_eq!(filter_for("warn", 3), "trace");
        assert_eq!(filter_for("warn", 9), "trace");
    }

    #[test]
    fn test_verbose_flags_never_lower_level() {
        assert_eq!(filter_for("debug", 1), "debug");
        assert_eq!(filter_for("DEBUG", 2), "debug");
        assert_eq!(filter_for("trace", 1), "trace");
        assert_eq!(filter_for("debug", 3), "trace");
    }

    #[test]
    fn test_directive_filter_keeps_targets() {
        assert_eq!(
            filter_for("fastman_cli_lib=debug", 1),
            "info,fastman_cli_lib=debug"
        );
    }
}
