//! Notification entity

use std::fmt;

use parking_lot::{Mutex, MutexGuard};

use super::{Action, SystemId};

/// Lifecycle of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationStatus {
    #[default]
    Pending,
    Shown,
    /// An action button was chosen. Terminal.
    Resolved,
    /// The body was clicked instead of a button.
    Clicked,
    Cancelled,
    Dismissed,
}

impl NotificationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shown => "shown",
            Self::Resolved => "resolved",
            Self::Clicked => "clicked",
            Self::Cancelled => "cancelled",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable part of a notification, only reachable through [`Notification::lock`].
///
/// State machine:
///   PENDING -> SHOWN (mark_shown)
///   SHOWN -> RESOLVED (select_action)
///   SHOWN -> CLICKED | CANCELLED | DISMISSED (release)
///   CLICKED | CANCELLED | DISMISSED -> SHOWN (mark_shown, with a fresh id)
#[derive(Debug, Default)]
pub struct NotificationState {
    system_id: Option<SystemId>,
    status: NotificationStatus,
    selected_action: Option<String>,
    /// Native button index -> position in the action list.
    button_slots: Vec<usize>,
}

impl NotificationState {
    pub fn system_id(&self) -> Option<SystemId> {
        self.system_id
    }

    pub fn status(&self) -> NotificationStatus {
        self.status
    }

    pub fn selected_action(&self) -> Option<&str> {
        self.selected_action.as_deref()
    }

    pub fn is_shown(&self) -> bool {
        self.status == NotificationStatus::Shown
    }

    pub fn is_resolved(&self) -> bool {
        self.status == NotificationStatus::Resolved
    }

    /// Record a successful native show.
    ///
    /// `button_slots[i]` is the action position behind native button `i`.
    pub fn mark_shown(&mut self, id: SystemId, button_slots: Vec<usize>) {
        self.system_id = Some(id);
        self.status = NotificationStatus::Shown;
        self.button_slots = button_slots;
    }

    /// Action position behind a native button index.
    pub fn slot_for_button(&self, native_index: usize) -> Option<usize> {
        self.button_slots.get(native_index).copied()
    }

    /// Record the chosen action. Returns false if the notification was not
    /// showing, in which case nothing changes.
    pub fn select_action(&mut self, action_id: &str) -> bool {
        if !self.is_shown() {
            return false;
        }
        self.selected_action = Some(action_id.to_string());
        self.status = NotificationStatus::Resolved;
        self.clear_native();
        true
    }

    /// Forget the native notification after it left the screen.
    /// Returns false when there was nothing showing to release.
    pub fn release(&mut self, status: NotificationStatus) -> bool {
        if !self.is_shown() {
            return false;
        }
        self.status = status;
        self.clear_native();
        true
    }

    fn clear_native(&mut self) {
        self.system_id = None;
        self.button_slots.clear();
    }
}

/// One logical toast notification.
///
/// Display content and actions are fixed at construction; everything the
/// native facility or its callbacks change lives behind the entity's lock.
#[derive(Debug)]
pub struct Notification {
    event_id: Option<String>,
    title: String,
    message: String,
    actions: Vec<Action>,
    state: Mutex<NotificationState>,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            event_id: None,
            title: title.into(),
            message: message.into(),
            actions,
            state: Mutex::new(NotificationState::default()),
        }
    }

    /// Attach the application-level event this notification reports on.
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Acquire the exclusive lock over the mutable state.
    ///
    /// Not reentrant: never call this while already holding the guard.
    pub fn lock(&self) -> MutexGuard<'_, NotificationState> {
        self.state.lock()
    }

    /// Resolve a native button index to the action it was added for.
    pub fn action_for_button(&self, state: &NotificationState, native_index: usize) -> Option<&Action> {
        state
            .slot_for_button(native_index)
            .and_then(|slot| self.actions.get(slot))
    }

    pub fn status(&self) -> NotificationStatus {
        self.lock().status()
    }

    pub fn system_id(&self) -> Option<SystemId> {
        self.lock().system_id()
    }

    pub fn selected_action(&self) -> Option<String> {
        self.lock().selected_action().map(str::to_string)
    }
}
