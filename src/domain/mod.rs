//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod duration;
pub mod error;
pub mod identity;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use duration::Duration;
pub use error::*;
pub use identity::AppIdentity;
pub use notification::{
    Action, DismissalReason, Notification, NotificationState, NotificationStatus, SoundPath,
    SoundProfile, SystemId,
};
