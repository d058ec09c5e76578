//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the config command
//! and the composition root wiring the notification core to its adapters.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{build_center, run_show, EXIT_ERROR, EXIT_NO_RESPONSE, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ShowArgs, ShowOptions};
pub use presenter::Presenter;
