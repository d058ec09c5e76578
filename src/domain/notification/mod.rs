//! Notification entity and its value objects

mod action;
mod dismissal;
mod entity;
mod id;
mod sound;

pub use action::Action;
pub use dismissal::DismissalReason;
pub use entity::{Notification, NotificationState, NotificationStatus};
pub use id::SystemId;
pub use sound::{SoundPath, SoundProfile};
