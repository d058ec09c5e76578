//! Application layer - Core services and port interfaces
//!
//! Contains the notification lifecycle (show, cancel, callback routing)
//! and the trait definitions for the native facility and platform glue.

pub mod center;
pub mod dispatcher;
pub mod facility;
pub mod ports;
pub mod registry;

// Re-export services
pub use center::NotificationCenter;
pub use dispatcher::{CallbackDispatcher, DismissalPolicy};
pub use facility::FacilityHandle;
pub use registry::IdentifierRegistry;
