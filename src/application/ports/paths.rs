//! Platform path resolution port interface

use std::path::PathBuf;

use thiserror::Error;

/// Path resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("data directory is not configured")]
    EmptyDataDir,

    #[error("file not found: {0}")]
    NotFound(PathBuf),
}

/// Port for locating the files the native facility needs
pub trait PlatformPaths: Send + Sync {
    /// Path of the native notification library.
    fn resolve_library_path(&self) -> Result<PathBuf, PathError>;

    /// Path of the icon shown on notifications.
    fn resolve_icon_path(&self) -> Result<PathBuf, PathError>;
}
