//! C callback trampolines
//!
//! The glue library's callbacks carry no user data pointer, so the sink
//! they forward to lives in a process-wide slot.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::ports::ToastEventSink;
use crate::domain::{DismissalReason, SystemId};

static EVENT_SINK: RwLock<Option<Arc<dyn ToastEventSink>>> = parking_lot::const_rwlock(None);

/// Route all subsequent native callbacks to `sink`.
pub fn install_sink(sink: Arc<dyn ToastEventSink>) {
    *EVENT_SINK.write() = Some(sink);
}

pub extern "C" fn on_activated(id: i64, action_index: i32) {
    forward(|sink| sink.activated(SystemId::new(id), action_index));
}

pub extern "C" fn on_dismissed(id: i64, reason: i32) {
    forward(|sink| sink.dismissed(SystemId::new(id), DismissalReason::from_code(reason)));
}

pub extern "C" fn on_failed(id: i64, _reason: i32) {
    forward(|sink| sink.dismissed(SystemId::new(id), DismissalReason::Failed));
}

fn forward(deliver: impl FnOnce(&dyn ToastEventSink)) {
    // Clone out so the slot is not locked while the sink runs.
    let sink = EVENT_SINK.read().clone();
    let Some(sink) = sink else {
        log::debug!("notify: callback before sink was installed");
        return;
    };

    // Unwinding into the native caller is undefined behavior.
    if catch_unwind(AssertUnwindSafe(|| deliver(sink.as_ref()))).is_err() {
        log::error!("notify: notification callback panicked");
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl ToastEventSink for RecordingSink {
        fn activated(&self, id: SystemId, action_index: i32) {
            self.events.lock().push(format!("activated {} {}", id, action_index));
        }

        fn dismissed(&self, id: SystemId, reason: DismissalReason) {
            self.events.lock().push(format!("dismissed {} {}", id, reason));
        }
    }

    // One test owns the global slot to avoid cross-test interference.
    #[test]
    fn trampolines_forward_to_installed_sink() {
        let sink = Arc::new(RecordingSink::default());
        install_sink(sink.clone());

        on_activated(42, 1);
        on_dismissed(42, 2);
        on_failed(43, 99);

        assert_eq!(
            *sink.events.lock(),
            vec![
                "activated 42 1".to_string(),
                "dismissed 42 timed_out".to_string(),
                "dismissed 43 failed".to_string(),
            ]
        );
    }
}
