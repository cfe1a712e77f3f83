//! Version command

use console::style;

/// Crate version baked in at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the fastman version
pub struct VersionCommand;

impl VersionCommand {
    /// Execute the command
    pub fn execute() {
        println!("{} {}", style("fastman").cyan().bold(), style(VERSION).green());
    }
}

/// Plain version line, as printed without colors
#[must_use]
pub fn version_line() -> String {
    format!("fastman {VERSION}")
}
