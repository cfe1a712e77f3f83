//! CLI command implementations

pub mod listapps;
pub mod startapp;
pub mod version;

pub use listapps::ListAppsCommand;
pub use startapp::StartAppCommand;
pub use version::VersionCommand;
