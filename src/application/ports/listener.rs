//! Notification outcome listener port

use std::sync::Arc;

use crate::domain::{DismissalReason, Notification};

/// Receives the outcome of shown notifications.
///
/// Invoked on the native facility's callback thread after the entity lock
/// has been released, so implementations may inspect or cancel the
/// notification. Keep them short: the facility waits on the call.
pub trait NotificationListener: Send + Sync {
    /// A button was clicked and resolved to `action_id`.
    fn action_selected(&self, notification: &Arc<Notification>, action_id: &str);

    /// The notification body was clicked.
    fn clicked(&self, _notification: &Arc<Notification>) {}

    /// The notification was dismissed and released.
    fn dismissed(&self, _notification: &Arc<Notification>, _reason: DismissalReason) {}
}
