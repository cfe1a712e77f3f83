//! List generated modules

use anyhow::{Context, Result};
use console::{style, Emoji};
use std::path::{Path, PathBuf};

use crate::scaffold::{ModuleDescriptor, ModuleRegistry};

static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");

/// List the modules under a base directory
pub struct ListAppsCommand {
    base_dir: PathBuf,
    json: bool,
}

impl ListAppsCommand {
    /// Create a new command instance
    pub const fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            json: false,
        }
    }

    /// Print descriptors as JSON instead of a table
    #[must_use]
    pub const fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Scan the base directory
    #[must_use]
    pub fn run(&self) -> Vec<ModuleDescriptor> {
        ModuleRegistry::new(&self.base_dir).scan()
    }

    /// Execute the command
    ///
    /// An empty or missing directory is reported, not treated as a failure.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON serialization fails.
    pub fn execute(&self) -> Result<()> {
        tracing::info!(dir = %self.base_dir.display(), "Scanning for modules");

        let modules = self.run();
        tracing::debug!(count = modules.len(), "Scan complete");

        if self.json {
            let json = serde_json::to_string_pretty(&modules)
                .context("Failed to serialize module list")?;
            println!("{json}");
            return Ok(());
        }

        println!(
            "\n{}{}\n",
            CLIPBOARD,
            style("FastMan - Listing apps...").blue().bold()
        );
        print!("{}", format_modules(&self.base_dir, &modules));

        Ok(())
    }
}

/// Format the module table
#[must_use]
pub fn format_modules(base_dir: &Path, modules: &[ModuleDescriptor]) -> String {
    if modules.is_empty() {
        return format!(
            "{}\n\n{}\n\n",
            style(format!("No modular apps found in '{}/'", base_dir.display())).yellow(),
            style("Create one with: fastman startapp MyApp").dim()
        );
    }

    let name_width = column_width("Module", modules.iter().map(|m| m.module_name.len()));
    let path_width = column_width(
        "Path",
        modules.iter().map(|m| m.path.display().to_string().len()),
    );

    let mut lines = vec![
        format!(
            "{}{}\n",
            PACKAGE,
            style(format!("Modular apps in '{}/'", base_dir.display())).bold()
        ),
        format!(
            "  {}  {}  {}  {}",
            style(format!("{:<name_width$}", "Module")).bold(),
            style(format!("{:<path_width$}", "Path")).bold(),
            style(format!("{:^5}", "Files")).bold(),
            style("Status").bold()
        ),
    ];

    for module in modules {
        let status = if module.is_complete {
            style("✓ Complete".to_string()).green()
        } else {
            style("⚠ Partial".to_string()).yellow()
        };
        lines.push(format!(
            "  {}  {}  {}  {}",
            style(format!("{:<name_width$}", module.module_name)).cyan(),
            style(format!("{:<path_width$}", module.path.display().to_string())).dim(),
            style(format!("{:^5}", module.file_count)).green(),
            status
        ));
        if !module.is_complete && !module.missing_files.is_empty() {
            lines.push(format!(
                "  {:<name_width$}  {}",
                "",
                style(format!("missing: {}", module.missing_files.join(", "))).dim()
            ));
        }
    }

    lines.push(format!(
        "\n{} {} module(s) found\n",
        style("Total:").bold(),
        modules.len()
    ));

    lines.join("\n") + "\n"
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.fold(header.len(), usize::max)
}
