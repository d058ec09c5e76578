//! Native facility handle
//!
//! Owns the one-time setup of the native notification facility and hands
//! out the loaded facility afterwards.

use std::sync::{Arc, OnceLock};

use crate::domain::AppIdentity;

use super::ports::{FacilityError, LibraryLoader, PlatformPaths, ToastEventSink, ToastFacility};

/// Lazily initialized connection to the native facility.
///
/// The first [`get`](Self::get) resolves the library path, loads the
/// library, registers the application identity and installs the callback
/// sink. The outcome, success or failure, is kept for the lifetime of the
/// handle; a failed setup is never retried.
pub struct FacilityHandle {
    identity: AppIdentity,
    paths: Arc<dyn PlatformPaths>,
    loader: Arc<dyn LibraryLoader>,
    sink: Arc<dyn ToastEventSink>,
    facility: OnceLock<Option<Arc<dyn ToastFacility>>>,
}

impl FacilityHandle {
    pub fn new(
        identity: AppIdentity,
        paths: Arc<dyn PlatformPaths>,
        loader: Arc<dyn LibraryLoader>,
        sink: Arc<dyn ToastEventSink>,
    ) -> Self {
        Self {
            identity,
            paths,
            loader,
            sink,
            facility: OnceLock::new(),
        }
    }

    /// The facility, or None if setup failed.
    ///
    /// Concurrent first callers block until the single setup attempt
    /// finishes and all observe its outcome.
    pub fn get(&self) -> Option<Arc<dyn ToastFacility>> {
        self.facility
            .get_or_init(|| match self.initialize() {
                Ok(facility) => {
                    log::info!(
                        "notify: native facility ready for {}",
                        self.identity.app_name
                    );
                    Some(facility)
                }
                Err(e) => {
                    log::error!("notify: notifications disabled: {}", e);
                    None
                }
            })
            .clone()
    }

    /// Whether setup has run, regardless of its outcome.
    pub fn is_initialized(&self) -> bool {
        self.facility.get().is_some()
    }

    /// Whether setup has run and failed.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.facility.get(), Some(None))
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    fn initialize(&self) -> Result<Arc<dyn ToastFacility>, FacilityError> {
        let path = self.paths.resolve_library_path()?;
        log::debug!("notify: loading native library {}", path.display());

        let facility = self.loader.load(&path)?;
        facility.initialize(&self.identity)?;
        facility.register_callbacks(Arc::clone(&self.sink))?;

        Ok(facility)
    }
}
