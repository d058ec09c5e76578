//! Callback dispatcher
//!
//! Entry points the native facility calls from its own thread when a
//! notification is clicked or leaves the screen.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{DismissalReason, NotificationStatus, SystemId};

use super::ports::{AppLauncher, NotificationListener, ToastEventSink, NO_BUTTON};
use super::registry::IdentifierRegistry;

/// Set of dismissal reasons that release a notification's registry entry.
///
/// Reasons outside the set mean the notification is still logically
/// active (e.g. moved to the notification center) and stays registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissalPolicy {
    release_on: HashSet<DismissalReason>,
}

impl DismissalPolicy {
    pub fn new(reasons: impl IntoIterator<Item = DismissalReason>) -> Self {
        Self {
            release_on: reasons.into_iter().collect(),
        }
    }

    pub fn releases(&self, reason: DismissalReason) -> bool {
        self.release_on.contains(&reason)
    }
}

impl Default for DismissalPolicy {
    fn default() -> Self {
        Self::new([
            DismissalReason::UserCanceled,
            DismissalReason::TimedOut,
            DismissalReason::Failed,
        ])
    }
}

/// Routes facility callbacks back to the notifications they concern.
pub struct CallbackDispatcher {
    registry: Arc<IdentifierRegistry>,
    launcher: Arc<dyn AppLauncher>,
    policy: DismissalPolicy,
    listener: Option<Arc<dyn NotificationListener>>,
}

impl CallbackDispatcher {
    pub fn new(registry: Arc<IdentifierRegistry>, launcher: Arc<dyn AppLauncher>) -> Self {
        Self {
            registry,
            launcher,
            policy: DismissalPolicy::default(),
            listener: None,
        }
    }

    pub fn with_policy(mut self, policy: DismissalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_listener(mut self, listener: Arc<dyn NotificationListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// A notification was activated.
    ///
    /// `NO_BUTTON` means the body was clicked: the application is launched
    /// and the entry dropped, known or not. Otherwise the entry is taken
    /// and the button index resolved to its action; if another callback
    /// took it first this is a no-op.
    pub fn on_activated(&self, id: SystemId, action_index: i32) {
        if action_index == NO_BUTTON {
            if let Err(e) = self.launcher.launch() {
                log::warn!("notify: failed to launch application: {}", e);
            }
            if let Some(notification) = self.registry.take(id) {
                let released = notification.lock().release(NotificationStatus::Clicked);
                if released {
                    if let Some(listener) = &self.listener {
                        listener.clicked(&notification);
                    }
                }
            }
            return;
        }

        let Some(notification) = self.registry.take(id) else {
            log::debug!("notify: activation for {} already handled", id);
            return;
        };

        let selected = {
            let mut state = notification.lock();
            let action = usize::try_from(action_index)
                .ok()
                .and_then(|index| notification.action_for_button(&state, index))
                .map(|action| action.id.clone());

            match action {
                Some(action_id) if state.select_action(&action_id) => Some(action_id),
                Some(_) => None,
                None => {
                    log::warn!(
                        "notify: notification {} has no action for button {}",
                        id,
                        action_index
                    );
                    None
                }
            }
        };

        if let (Some(action_id), Some(listener)) = (selected, &self.listener) {
            listener.action_selected(&notification, &action_id);
        }
    }

    /// A notification left the screen.
    pub fn on_dismissed(&self, id: SystemId, reason: DismissalReason) {
        if !self.policy.releases(reason) {
            log::debug!("notify: notification {} {}, keeping it registered", id, reason);
            return;
        }

        let Some(notification) = self.registry.take(id) else {
            return;
        };

        let released = {
            let mut state = notification.lock();
            // A re-show may already have replaced the identifier.
            state.system_id() == Some(id) && state.release(NotificationStatus::Dismissed)
        };

        if released {
            if let Some(listener) = &self.listener {
                listener.dismissed(&notification, reason);
            }
        }
    }
}

impl ToastEventSink for CallbackDispatcher {
    fn activated(&self, id: SystemId, action_index: i32) {
        self.on_activated(id, action_index);
    }

    fn dismissed(&self, id: SystemId, reason: DismissalReason) {
        self.on_dismissed(id, reason);
    }
}
