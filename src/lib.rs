//! Toast Notifier - desktop toast notifications with action routing
//!
//! This crate shows toast notifications through a native notification
//! facility and routes clicks, button presses and dismissals back to the
//! notification that caused them.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification entity, value objects, configuration and errors
//! - **Application**: Facility handle, identifier registry, callback dispatcher,
//!   notification center, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (WinToast library, paths,
//!   launch command, config file)
//! - **CLI**: Command-line interface, argument parsing, and composition root

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod logging;
