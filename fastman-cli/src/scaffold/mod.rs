//! Module scaffolding engine
//!
//! Turns one entity name into a complete module directory and inventories
//! the modules that already exist:
//! - [`helpers`] resolves a raw name into its canonical forms
//! - [`generator`] writes the template catalog to disk
//! - [`registry`] scans a base directory for generated modules
//!
//! The engine is synchronous and does no logging; it returns structured
//! values that the commands format for the terminal.

pub mod generator;
pub mod helpers;
pub mod registry;

pub use generator::{FileOutcome, ModuleWriter, WriteResult, WrittenFile};
pub use helpers::{ModuleSpec, TemplateHelpers, RESERVED_NAMES};
pub use registry::{ModuleDescriptor, ModuleRegistry};
