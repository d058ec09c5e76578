//! WinToast-backed native facility adapter

use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    FacilityError, LibraryLoader, ToastBuilder, ToastEventSink, ToastFacility,
};
use crate::domain::{AppIdentity, SoundPath, SoundProfile, SystemId};

use super::api::{check, wide, ToastHandle, WinToastApi};
use super::callbacks;

/// Native facility implemented by the WinToast glue library
pub struct WinToastFacility {
    api: Arc<WinToastApi>,
}

impl WinToastFacility {
    pub fn load(path: &Path) -> Result<Self, FacilityError> {
        Ok(Self {
            api: Arc::new(WinToastApi::load(path)?),
        })
    }
}

impl ToastFacility for WinToastFacility {
    fn initialize(&self, identity: &AppIdentity) -> Result<(), FacilityError> {
        let app_name = wide(&identity.app_name);
        let vendor = wide(&identity.vendor);
        let product = wide(&identity.product);
        let sub_product = wide(&identity.sub_product);
        let version = wide(&identity.version);

        // SAFETY: all pointers are NUL-terminated and outlive the call.
        let status = unsafe {
            (self.api.initialize)(
                app_name.as_ptr(),
                vendor.as_ptr(),
                product.as_ptr(),
                sub_product.as_ptr(),
                version.as_ptr(),
            )
        };
        check(status, FacilityError::Initialize)
    }

    fn register_callbacks(&self, sink: Arc<dyn ToastEventSink>) -> Result<(), FacilityError> {
        callbacks::install_sink(sink);

        // SAFETY: the trampolines are 'static extern "C" functions.
        unsafe {
            check(
                (self.api.set_activated_callback)(callbacks::on_activated),
                FacilityError::Callbacks,
            )?;
            check(
                (self.api.set_dismissed_callback)(callbacks::on_dismissed),
                FacilityError::Callbacks,
            )?;
            check(
                (self.api.set_failed_callback)(callbacks::on_failed),
                FacilityError::Callbacks,
            )
        }
    }

    fn new_builder(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Box<dyn ToastBuilder>, FacilityError> {
        let title = wide(title);
        let message = wide(message);

        // SAFETY: both strings are NUL-terminated and outlive the call.
        let handle = unsafe { (self.api.create)(title.as_ptr(), message.as_ptr()) };
        if handle.is_null() {
            return Err(FacilityError::Builder("native builder is null".to_string()));
        }

        Ok(Box::new(WinToastBuilder {
            api: Arc::clone(&self.api),
            handle,
        }))
    }

    fn hide(&self, id: SystemId) -> Result<(), FacilityError> {
        // SAFETY: plain integer argument.
        let status = unsafe { (self.api.hide)(id.get()) };
        check(status, |_| FacilityError::Hide(id))
    }
}

/// Native notification under construction, deleted on drop
pub struct WinToastBuilder {
    api: Arc<WinToastApi>,
    handle: ToastHandle,
}

impl ToastBuilder for WinToastBuilder {
    fn set_image(&mut self, path: &Path) -> Result<(), FacilityError> {
        let path = wide(&path.to_string_lossy());
        // SAFETY: `handle` is live until drop; `path` outlives the call.
        let status = unsafe { (self.api.set_image)(self.handle, path.as_ptr()) };
        check(status, FacilityError::Image)
    }

    fn set_sound(&mut self, profile: SoundProfile, path: SoundPath) -> Result<(), FacilityError> {
        // SAFETY: `handle` is live until drop.
        let status = unsafe { (self.api.set_sound)(self.handle, profile.code(), path.code()) };
        check(status, FacilityError::Sound)
    }

    fn add_button(&mut self, label: &str) -> Result<(), FacilityError> {
        let label = wide(label);
        // SAFETY: `handle` is live until drop; `label` outlives the call.
        let status = unsafe { (self.api.add_button)(self.handle, label.as_ptr()) };
        check(status, FacilityError::Button)
    }

    fn show(&mut self) -> Result<SystemId, FacilityError> {
        // SAFETY: `handle` is live until drop.
        let id = unsafe { (self.api.show)(self.handle) };
        if id < 0 {
            return Err(FacilityError::Show(format!("native status {}", id)));
        }
        Ok(SystemId::new(id))
    }
}

impl Drop for WinToastBuilder {
    fn drop(&mut self) {
        // SAFETY: `handle` came from `create` and is deleted exactly once.
        unsafe { (self.api.delete)(self.handle) };
    }
}

/// Loads [`WinToastFacility`] from the glue library
#[derive(Debug, Default, Clone, Copy)]
pub struct WinToastLoader;

impl LibraryLoader for WinToastLoader {
    fn load(&self, path: &Path) -> Result<Arc<dyn ToastFacility>, FacilityError> {
        Ok(Arc::new(WinToastFacility::load(path)?))
    }
}
