//! Identifier registry
//!
//! Maps the identifiers the native facility hands out back to the
//! notifications that own them, so callbacks arriving on the facility's
//! thread can find their notification.

use std::sync::{Arc, Weak};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{Notification, SystemId};

/// Concurrent `SystemId -> Notification` lookup table.
///
/// Entries are weak: the application owns its notifications, the registry
/// only finds them. Every method is a single atomic operation on the map.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    entries: DashMap<SystemId, Weak<Notification>>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `id` to `notification`.
    ///
    /// Returns false if a live entry for `id` already existed; it is
    /// replaced, since the facility never reuses an identifier that is
    /// still on screen.
    pub fn insert(&self, id: SystemId, notification: &Arc<Notification>) -> bool {
        let weak = Arc::downgrade(notification);
        match self.entries.entry(id) {
            Entry::Occupied(mut occupied) => {
                let was_live = occupied.get().strong_count() > 0;
                occupied.insert(weak);
                !was_live
            }
            Entry::Vacant(vacant) => {
                vacant.insert(weak);
                true
            }
        }
    }

    /// Look up without removing.
    pub fn get(&self, id: SystemId) -> Option<Arc<Notification>> {
        self.entries.get(&id).and_then(|entry| entry.upgrade())
    }

    /// Atomically remove the entry for `id` and return its notification.
    ///
    /// Of any number of concurrent callers for the same `id`, exactly one
    /// gets `Some`. An entry whose notification was already dropped is
    /// removed and reported as `None`.
    pub fn take(&self, id: SystemId) -> Option<Arc<Notification>> {
        self.entries
            .remove(&id)
            .and_then(|(_, weak)| weak.upgrade())
    }

    /// Remove the entry for `id`. Returns whether this call removed it.
    pub fn remove(&self, id: SystemId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn contains(&self, id: SystemId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose notification no longer exists.
    /// Returns how many were removed.
    pub fn prune(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, weak| weak.strong_count() > 0);
        before.saturating_sub(self.entries.len())
    }
}
