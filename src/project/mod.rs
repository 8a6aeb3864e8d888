//! Workspace enumeration and loading.

mod config;
pub mod file_loader;
pub mod workspace_loader;

pub use config::LoaderConfig;
pub use workspace_loader::{LoadReport, WorkspaceLoader};
