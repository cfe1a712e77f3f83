//! Module scaffolding command
//!
//! Generates a complete layered module from a single entity name:
//! - SQLAlchemy model with common fields
//! - Pydantic schemas (Create, Update, Response)
//! - CRUD operations extending the base CRUD
//! - Service layer with business logic
//! - FastAPI routes with full CRUD endpoints
//! - Custom exceptions
//! - Module exports and documentation
//!
//! # Example
//!
//! ```bash
//! fastman startapp Order
//! fastman startapp order-item --dir app --force
//! ```

use anyhow::{Context, Result};
use console::{style, Emoji};
use std::path::PathBuf;

use crate::error::ScaffoldError;
use crate::scaffold::{FileOutcome, ModuleSpec, ModuleWriter, WriteResult};

static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static CREATED: Emoji<'_, '_> = Emoji("✓", "+");
static OVERWRITTEN: Emoji<'_, '_> = Emoji("↻", "~");
static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", "");
static TIP: Emoji<'_, '_> = Emoji("💡 ", "");

/// Create a new module
pub struct StartAppCommand {
    name: String,
    base_dir: PathBuf,
    force: bool,
    json: bool,
}

impl StartAppCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Entity name in any casing (`Order`, `order-item`, `order_item`)
    /// * `base_dir` - Directory that holds the modules
    pub fn new(name: String, base_dir: PathBuf) -> Self {
        Self {
            name,
            base_dir,
            force: false,
            json: false,
        }
    }

    /// Overwrite an existing module's files
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Print the result as JSON instead of a summary
    #[must_use]
    pub const fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Resolve the name and write the module
    ///
    /// # Errors
    ///
    /// Returns the engine error unchanged so callers can match on it.
    pub fn run(&self) -> std::result::Result<WriteResult, ScaffoldError> {
        let spec = ModuleSpec::resolve(&self.name)?;
        tracing::debug!(
            raw = %spec.raw_input,
            module = %spec.module_name,
            class = %spec.class_name,
            "Resolved module name"
        );

        ModuleWriter::new(&self.base_dir)
            .force(self.force)
            .write(&spec)
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the module already exists
    /// without `--force`, or a file cannot be written.
    pub fn execute(&self) -> Result<()> {
        tracing::info!(
            name = %self.name,
            dir = %self.base_dir.display(),
            force = self.force,
            "Creating module"
        );

        if !self.json {
            println!(
                "\n{}{}\n",
                ROCKET,
                style("FastMan - Creating new app...").blue().bold()
            );
        }

        let result = match self.run() {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, "Module generation failed");
                if matches!(err, ScaffoldError::ModuleAlreadyExists { .. }) {
                    eprintln!(
                        "{}{} Use --force to overwrite existing files",
                        TIP,
                        style("Tip:").yellow()
                    );
                }
                return Err(err).with_context(|| format!("Failed to create app '{}'", self.name));
            }
        };

        tracing::info!(
            module = %result.module_name,
            files = result.file_count(),
            overwritten = result.overwritten_count(),
            "Module written"
        );

        if self.json {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize result")?;
            println!("{json}");
        } else {
            print!("{}", format_summary(&result));
            print!("{}", format_next_steps(&result.module_name));
            println!(
                "\n{}{}\n",
                SPARKLES,
                style(format!("App '{}' created successfully!", result.class_name))
                    .green()
                    .bold()
            );
        }

        Ok(())
    }
}

/// Format the per-file listing and summary table
#[must_use]
pub fn format_summary(result: &WriteResult) -> String {
    let mut lines: Vec<String> = result
        .files
        .iter()
        .map(|file| {
            let (mark, verb) = match file.outcome {
                FileOutcome::Created => (style(CREATED.to_string()).green(), "Created"),
                FileOutcome::Overwritten => {
                    (style(OVERWRITTEN.to_string()).yellow(), "Overwritten")
                }
            };
            format!(
                "  {} {}: {} {}",
                mark,
                verb,
                file.relative_path,
                style(format!("({})", file.kind.description())).dim()
            )
        })
        .collect();

    lines.push(String::new());
    lines.push(style("Summary").bold().underlined().to_string());
    lines.push(format!("  {:<15}{}", "App Name:", style(&result.class_name).cyan()));
    lines.push(format!("  {:<15}{}", "Module Name:", style(&result.module_name).cyan()));
    lines.push(format!(
        "  {:<15}{}",
        "Location:",
        style(result.target_directory.display()).cyan()
    ));
    lines.push(format!("  {:<15}{}", "Files Written:", style(result.file_count()).green()));

    let overwritten = result.overwritten_count();
    if overwritten > 0 {
        lines.push(format!("  {:<15}{}", "Overwritten:", style(overwritten).yellow()));
    }

    lines.join("\n") + "\n"
}

/// Format the follow-up instructions for a freshly generated module
#[must_use]
pub fn format_next_steps(module_name: &str) -> String {
    let hint = |text: String| format!("     {}", style(text).dim());

    let lines = [
        String::new(),
        style("Next steps:").bold().underlined().to_string(),
        String::new(),
        format!("  {} Register the router in app/apis/v1.py:", style("1.").cyan()),
        hint(format!(
            "from app.{module_name}.routes import router as {module_name}_router"
        )),
        hint(format!("router.include_router({module_name}_router)")),
        String::new(),
        format!("  {} Generate the database migration:", style("2.").cyan()),
        hint(format!(
            "alembic revision --autogenerate -m \"Add {module_name} table\""
        )),
        hint("alembic upgrade head".to_string()),
        String::new(),
        format!("  {} Test your API:", style("3.").cyan()),
        hint("uvicorn app.core.main:app --reload".to_string()),
        format!(
            "     Visit {}",
            style("http://localhost:8000/docs").cyan().underlined()
        ),
        String::new(),
        format!("  {} Customize:", style("4.").cyan()),
        format!("     Edit {module_name}/models.py to add custom fields"),
        format!("     Update {module_name}/services.py for business logic"),
        format!("     Modify {module_name}/routes.py for custom endpoints"),
    ];

    lines.join("\n") + "\n"
}
