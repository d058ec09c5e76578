//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod facility;
pub mod launcher;
pub mod listener;
pub mod paths;

// Re-export common types
pub use config::ConfigStore;
pub use facility::{
    FacilityError, LibraryLoader, ToastBuilder, ToastEventSink, ToastFacility, NO_BUTTON,
};
pub use launcher::{AppLauncher, LaunchError, NoOpLauncher};
pub use listener::NotificationListener;
pub use paths::{PathError, PlatformPaths};
