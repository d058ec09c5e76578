//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the WinToast
//! native facility, data directory path resolution, the launch command and
//! the config file store.

pub mod config;
pub mod launcher;
pub mod paths;
pub mod wintoast;

// Re-export adapters
pub use config::XdgConfigStore;
pub use launcher::CommandLauncher;
pub use paths::DataDirPaths;
pub use wintoast::{WinToastFacility, WinToastLoader};
