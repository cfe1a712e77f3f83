//! Module template catalog
//!
//! A fixed, ordered set of render functions. Each one produces the full text
//! of exactly one file of a generated module from the module's canonical
//! names. Rendering is plain placeholder substitution; there is no template
//! engine and no shared state between renders.

use serde::Serialize;

use crate::scaffold::{ModuleSpec, TemplateHelpers};

pub mod files;
pub use files::*;

/// Render function signature: `(module_name, class_name) -> content`
pub type RenderFn = fn(&str, &str) -> String;

/// Kind of file in a generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// ORM model definition
    Model,
    /// Validation schema definitions
    Schema,
    /// Data-access layer
    DataAccess,
    /// Service (business logic) layer
    Service,
    /// Route (HTTP endpoint) layer
    Route,
    /// Exception type definitions
    ExceptionType,
    /// Package manifest re-exporting the module's public names
    PackageManifest,
    /// Module documentation
    Documentation,
}

impl FileKind {
    /// File name inside the module directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Model => "models.py",
            Self::Schema => "schemas.py",
            Self::DataAccess => "crud.py",
            Self::Service => "services.py",
            Self::Route => "routes.py",
            Self::ExceptionType => "exceptions.py",
            Self::PackageManifest => "__init__.py",
            Self::Documentation => "README.md",
        }
    }

    /// Short description for user feedback
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Model => "SQLAlchemy model",
            Self::Schema => "Pydantic schemas",
            Self::DataAccess => "CRUD operations",
            Self::Service => "Service layer",
            Self::Route => "API routes",
            Self::ExceptionType => "Custom exceptions",
            Self::PackageManifest => "Module exports",
            Self::Documentation => "Module documentation",
        }
    }

    /// Render this kind of file
    #[must_use]
    pub fn render(self, module_name: &str, class_name: &str) -> String {
        let template = match self {
            Self::Model => MODELS_PY,
            Self::Schema => SCHEMAS_PY,
            Self::DataAccess => CRUD_PY,
            Self::Service => SERVICES_PY,
            Self::Route => ROUTES_PY,
            Self::ExceptionType => EXCEPTIONS_PY,
            Self::PackageManifest => INIT_PY,
            Self::Documentation => README_MD,
        };
        substitute(template, module_name, class_name)
    }
}

/// Number of files in every generated module
pub const EXPECTED_FILE_COUNT: usize = CATALOG.len();

/// Catalog in generation order
pub const CATALOG: [(FileKind, RenderFn); 8] = [
    (FileKind::Model, render_model),
    (FileKind::Schema, render_schemas),
    (FileKind::DataAccess, render_crud),
    (FileKind::Service, render_services),
    (FileKind::Route, render_routes),
    (FileKind::ExceptionType, render_exceptions),
    (FileKind::PackageManifest, render_init),
    (FileKind::Documentation, render_readme),
];

/// Ordered `(kind, render_fn)` pairs
#[must_use]
pub const fn catalog() -> &'static [(FileKind, RenderFn)] {
    &CATALOG
}

/// File names of the catalog, in generation order
pub fn file_names() -> impl Iterator<Item = &'static str> {
    catalog().iter().map(|(kind, _)| kind.file_name())
}

/// One rendered file of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Which catalog entry produced it
    pub kind: FileKind,
    /// Path relative to the module directory
    pub relative_path: &'static str,
    /// Fully rendered content
    pub content: String,
}

/// Render every catalog entry for a module
#[must_use]
pub fn generate(spec: &ModuleSpec) -> Vec<GeneratedFile> {
    catalog()
        .iter()
        .map(|(kind, render)| GeneratedFile {
            kind: *kind,
            relative_path: kind.file_name(),
            content: render(&spec.module_name, &spec.class_name),
        })
        .collect()
}

/// Render `models.py`
#[must_use]
pub fn render_model(module_name: &str, class_name: &str) -> String {
    FileKind::Model.render(module_name, class_name)
}

/// Render `schemas.py`
#[must_use]
pub fn render_schemas(module_name: &str, class_name: &str) -> String {
    FileKind::Schema.render(module_name, class_name)
}

/// Render `crud.py`
#[must_use]
pub fn render_crud(module_name: &str, class_name: &str) -> String {
    FileKind::DataAccess.render(module_name, class_name)
}

/// Render `services.py`
#[must_use]
pub fn render_services(module_name: &str, class_name: &str) -> String {
    FileKind::Service.render(module_name, class_name)
}

/// Render `routes.py`
#[must_use]
pub fn render_routes(module_name: &str, class_name: &str) -> String {
    FileKind::Route.render(module_name, class_name)
}

/// Render `exceptions.py`
#[must_use]
pub fn render_exceptions(module_name: &str, class_name: &str) -> String {
    FileKind::ExceptionType.render(module_name, class_name)
}

/// Render `__init__.py`
#[must_use]
pub fn render_init(module_name: &str, class_name: &str) -> String {
    FileKind::PackageManifest.render(module_name, class_name)
}

/// Render `README.md`
#[must_use]
pub fn render_readme(module_name: &str, class_name: &str) -> String {
    FileKind::Documentation.render(module_name, class_name)
}

fn substitute(template: &str, module_name: &str, class_name: &str) -> String {
    template
        .replace("{{plural_name}}", &TemplateHelpers::pluralize(module_name))
        .replace("{{module_name}}", module_name)
        .replace("{{class_name}}", class_name)
}
