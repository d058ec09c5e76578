//! Notification center: showing and cancelling notifications

use std::sync::Arc;

use crate::domain::{Notification, NotificationStatus, SoundPath, SoundProfile};

use super::facility::FacilityHandle;
use super::ports::{PlatformPaths, ToastBuilder};
use super::registry::IdentifierRegistry;

/// Shows and cancels notifications through the native facility.
///
/// Both operations are fire-and-forget: failures are logged and never
/// reach the caller.
pub struct NotificationCenter {
    facility: Arc<FacilityHandle>,
    registry: Arc<IdentifierRegistry>,
    paths: Arc<dyn PlatformPaths>,
    sound: SoundProfile,
}

impl NotificationCenter {
    pub fn new(
        facility: Arc<FacilityHandle>,
        registry: Arc<IdentifierRegistry>,
        paths: Arc<dyn PlatformPaths>,
    ) -> Self {
        Self {
            facility,
            registry,
            paths,
            sound: SoundProfile::Default,
        }
    }

    pub fn with_sound(mut self, sound: SoundProfile) -> Self {
        self.sound = sound;
        self
    }

    pub fn registry(&self) -> &Arc<IdentifierRegistry> {
        &self.registry
    }

    /// Display `notification` and register its identifier.
    ///
    /// Icon, sound and buttons are best-effort; a notification that could
    /// not be created or shown is left untouched.
    pub fn show(&self, notification: &Arc<Notification>) {
        let mut state = notification.lock();

        match state.status() {
            NotificationStatus::Resolved => {
                log::warn!(
                    "notify: refusing to show resolved notification \"{}\"",
                    notification.title()
                );
                return;
            }
            NotificationStatus::Shown => {
                log::debug!(
                    "notify: notification \"{}\" is already showing",
                    notification.title()
                );
                return;
            }
            _ => {}
        }

        let Some(facility) = self.facility.get() else {
            log::error!("notify: native facility unavailable, dropping notification");
            return;
        };

        // Dropping the builder releases it on every path below.
        let mut builder = match facility.new_builder(notification.title(), notification.message())
        {
            Ok(builder) => builder,
            Err(e) => {
                log::error!("notify: {}", e);
                return;
            }
        };

        self.attach_icon(builder.as_mut());

        if let Err(e) = builder.set_sound(self.sound, SoundPath::Default) {
            log::warn!("notify: {}", e);
        }

        let mut button_slots = Vec::with_capacity(notification.actions().len());
        for (position, action) in notification.actions().iter().enumerate() {
            match builder.add_button(&action.text) {
                Ok(()) => button_slots.push(position),
                Err(e) => log::warn!("notify: action \"{}\": {}", action.id, e),
            }
        }

        let id = match builder.show() {
            Ok(id) => id,
            Err(e) => {
                log::error!("notify: {}", e);
                return;
            }
        };

        state.mark_shown(id, button_slots);
        let pruned = self.registry.prune();
        if pruned > 0 {
            log::debug!("notify: pruned {} dropped notification(s)", pruned);
        }
        if !self.registry.insert(id, notification) {
            log::warn!("notify: identifier {} was still registered, replaced", id);
        }
        log::debug!("notify: showing \"{}\" as {}", notification.title(), id);
    }

    /// Hide `notification` and forget its identifier.
    pub fn cancel(&self, notification: &Arc<Notification>) {
        let mut state = notification.lock();

        let Some(id) = state.system_id() else {
            log::debug!(
                "notify: notification \"{}\" is not showing, nothing to cancel",
                notification.title()
            );
            return;
        };

        if let Some(facility) = self.facility.get() {
            // Most likely already dismissed by the user.
            if let Err(e) = facility.hide(id) {
                log::debug!("notify: {}", e);
            }
        }

        // A callback that already took the entry resolves the notification
        // once the lock is released.
        if self.registry.remove(id) {
            state.release(NotificationStatus::Cancelled);
        } else {
            log::debug!("notify: notification {} already taken by a callback", id);
        }
    }

    fn attach_icon(&self, builder: &mut dyn ToastBuilder) {
        match self.paths.resolve_icon_path() {
            Ok(icon) => {
                if let Err(e) = builder.set_image(&icon) {
                    log::warn!("notify: {}", e);
                }
            }
            Err(e) => log::warn!("notify: failed to locate icon: {}", e),
        }
    }
}
