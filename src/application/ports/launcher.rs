//! Application launch port interface

use thiserror::Error;

/// Launch errors
#[derive(Debug, Clone, Error)]
pub enum LaunchError {
    #[error("Launch command is empty")]
    EmptyCommand,

    #[error("Failed to launch application: {0}")]
    SpawnFailed(String),
}

/// Port for bringing the application forward when a notification body is
/// clicked.
pub trait AppLauncher: Send + Sync {
    fn launch(&self) -> Result<(), LaunchError>;
}

/// Launcher that does nothing, for hosts without a UI to restore
pub struct NoOpLauncher;

impl AppLauncher for NoOpLauncher {
    fn launch(&self) -> Result<(), LaunchError> {
        Ok(())
    }
}
