//! fastman CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use fastman_cli_lib::commands::{ListAppsCommand, StartAppCommand, VersionCommand};
use fastman_cli_lib::{observability, FastmanConfig};

#[derive(Parser)]
#[command(name = "fastman")]
#[command(version)]
#[command(about = "FastMan CLI - FastAPI Module Manager", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = FastmanConfig::DEFAULT_FILE)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new modular app
    Startapp {
        /// App name (e.g., `Order`, `order-item`, `order_item`)
        name: String,
        /// Directory that holds the apps (defaults to `apps_dir` from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all modular apps
    Listapps {
        /// Directory to scan (defaults to `apps_dir` from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if matches!(cli.command, Commands::Version) {
        VersionCommand::execute();
        return Ok(());
    }

    // listapps always succeeds, so a broken config only earns a warning there
    let lenient = matches!(cli.command, Commands::Listapps { .. });
    let (config, load_error) = if lenient {
        FastmanConfig::load_or_default(&cli.config)
    } else {
        (FastmanConfig::load_from(&cli.config)?, None)
    };

    let logging = observability::init(&config.log_filter, config.log_format, cli.verbose);
    if lenient {
        if let Err(err) = logging {
            observability::init(
                &FastmanConfig::default().log_filter,
                config.log_format,
                cli.verbose,
            )?;
            tracing::warn!(error = %format!("{err:#}"), "Ignoring invalid log filter");
        }
    } else {
        logging?;
    }

    if let Some(err) = load_error {
        tracing::warn!(
            error = %format!("{err:#}"),
            "Invalid configuration, falling back to defaults"
        );
    }
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Startapp {
            name,
            dir,
            force,
            json,
        } => {
            let base_dir = config.apps_dir_or(dir.as_deref());
            StartAppCommand::new(name, base_dir)
                .force(force)
                .json(json)
                .execute()?;
        }
        Commands::Listapps { dir, json } => {
            let base_dir = config.apps_dir_or(dir.as_deref());
            ListAppsCommand::new(base_dir).json(json).execute()?;
        }
        // Printed before configuration is loaded
        Commands::Version => {}
    }

    Ok(())
}
