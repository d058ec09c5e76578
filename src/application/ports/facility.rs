//! Native notification facility port interface

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{AppIdentity, DismissalReason, SoundPath, SoundProfile, SystemId};

use super::paths::PathError;

/// Action index the facility reports when the notification body, not a
/// button, was clicked.
pub const NO_BUTTON: i32 = -1;

/// Native facility errors
#[derive(Debug, Clone, Error)]
pub enum FacilityError {
    #[error("Failed to resolve library path: {0}")]
    LibraryPath(#[from] PathError),

    #[error("Failed to load library: {0}")]
    Load(String),

    #[error("Failed to initialize: {0}")]
    Initialize(String),

    #[error("Failed to register callbacks: {0}")]
    Callbacks(String),

    #[error("Failed to create notification: {0}")]
    Builder(String),

    #[error("Failed to set image: {0}")]
    Image(String),

    #[error("Failed to set sound: {0}")]
    Sound(String),

    #[error("Failed to add button: {0}")]
    Button(String),

    #[error("Failed to show notification: {0}")]
    Show(String),

    #[error("Failed to hide notification {0}")]
    Hide(SystemId),
}

/// Receiver for the facility's asynchronous callbacks.
///
/// Called from a thread the facility owns, never from the thread that
/// showed the notification.
pub trait ToastEventSink: Send + Sync {
    /// The notification body (`action_index == NO_BUTTON`) or one of its
    /// buttons was clicked.
    fn activated(&self, id: SystemId, action_index: i32);

    /// The notification left the screen without an activation.
    fn dismissed(&self, id: SystemId, reason: DismissalReason);
}

/// A native notification under construction.
///
/// Dropping the builder releases the native resource, whether or not it
/// was shown.
pub trait ToastBuilder {
    fn set_image(&mut self, path: &Path) -> Result<(), FacilityError>;

    fn set_sound(&mut self, profile: SoundProfile, path: SoundPath) -> Result<(), FacilityError>;

    /// Append a button. Buttons are indexed by successful additions, in order.
    fn add_button(&mut self, label: &str) -> Result<(), FacilityError>;

    /// Display the notification and return the identifier the facility
    /// assigned to it.
    fn show(&mut self) -> Result<SystemId, FacilityError>;
}

/// Connection to the native notification facility.
pub trait ToastFacility: Send + Sync {
    /// One-time identity registration. Creates or updates the OS-level
    /// application shortcut as a side effect.
    fn initialize(&self, identity: &AppIdentity) -> Result<(), FacilityError>;

    /// Route activation, dismissal and failure callbacks to `sink`.
    fn register_callbacks(&self, sink: Arc<dyn ToastEventSink>) -> Result<(), FacilityError>;

    fn new_builder(&self, title: &str, message: &str)
        -> Result<Box<dyn ToastBuilder>, FacilityError>;

    fn hide(&self, id: SystemId) -> Result<(), FacilityError>;
}

/// Loads a native facility from a library file.
pub trait LibraryLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Arc<dyn ToastFacility>, FacilityError>;
}
