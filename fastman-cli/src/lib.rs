//! fastman CLI library
//!
//! Scaffolds layered backend modules (model, schemas, data access, services,
//! routes, exceptions, package manifest, docs) from a single entity name.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod templates;

pub use config::FastmanConfig;
pub use error::ScaffoldError;
pub use scaffold::{
    ModuleDescriptor, ModuleRegistry, ModuleSpec, ModuleWriter, TemplateHelpers, WriteResult,
};
pub use templates::{FileKind, GeneratedFile};
