//! Symbol table of the WinToast glue library
//!
//! All strings cross the boundary as NUL-terminated UTF-16. Status-returning
//! functions report `0` on success; `PortmasterToastShow` returns the new
//! notification id, or a negative value on failure.

use std::ffi::c_void;
use std::path::Path;

use libloading::Library;

use crate::application::ports::FacilityError;

pub type ToastHandle = *mut c_void;
pub type ActivatedCallback = extern "C" fn(id: i64, action_index: i32);
pub type DismissedCallback = extern "C" fn(id: i64, reason: i32);

type InitializeFn = unsafe extern "C" fn(
    app_name: *const u16,
    vendor: *const u16,
    product: *const u16,
    sub_product: *const u16,
    version: *const u16,
) -> i32;
type SetActivatedFn = unsafe extern "C" fn(callback: ActivatedCallback) -> i32;
type SetDismissedFn = unsafe extern "C" fn(callback: DismissedCallback) -> i32;
type CreateFn = unsafe extern "C" fn(title: *const u16, message: *const u16) -> ToastHandle;
type DeleteFn = unsafe extern "C" fn(toast: ToastHandle);
type SetImageFn = unsafe extern "C" fn(toast: ToastHandle, path: *const u16) -> i32;
type SetSoundFn = unsafe extern "C" fn(toast: ToastHandle, option: i32, path: i32) -> i32;
type AddButtonFn = unsafe extern "C" fn(toast: ToastHandle, label: *const u16) -> i32;
type ShowFn = unsafe extern "C" fn(toast: ToastHandle) -> i64;
type HideFn = unsafe extern "C" fn(id: i64) -> i32;

/// Loaded library plus the functions resolved from it.
///
/// The function pointers are only valid while `_library` is loaded, which
/// is exactly as long as this struct lives.
pub struct WinToastApi {
    pub initialize: InitializeFn,
    pub set_activated_callback: SetActivatedFn,
    pub set_dismissed_callback: SetDismissedFn,
    pub set_failed_callback: SetDismissedFn,
    pub create: CreateFn,
    pub delete: DeleteFn,
    pub set_image: SetImageFn,
    pub set_sound: SetSoundFn,
    pub add_button: AddButtonFn,
    pub show: ShowFn,
    pub hide: HideFn,
    _library: Library,
}

impl WinToastApi {
    /// Load the library at `path` and resolve every symbol.
    pub fn load(path: &Path) -> Result<Self, FacilityError> {
        if !path.exists() {
            return Err(FacilityError::Load(format!(
                "{} does not exist",
                path.display()
            )));
        }

        // SAFETY: loading runs the library's initializers; the glue library
        // has none beyond the C runtime's.
        let library = unsafe { Library::new(path) }
            .map_err(|e| FacilityError::Load(e.to_string()))?;

        // SAFETY: each signature matches the glue library's exports.
        unsafe {
            Ok(Self {
                initialize: symbol(&library, b"PortmasterToastInitialize\0")?,
                set_activated_callback: symbol(&library, b"PortmasterToastActivatedCallback\0")?,
                set_dismissed_callback: symbol(&library, b"PortmasterToastDismissedCallback\0")?,
                set_failed_callback: symbol(&library, b"PortmasterToastFailedCallback\0")?,
                create: symbol(&library, b"PortmasterToastCreateNotification\0")?,
                delete: symbol(&library, b"PortmasterToastDeleteNotification\0")?,
                set_image: symbol(&library, b"PortmasterToastSetImage\0")?,
                set_sound: symbol(&library, b"PortmasterToastSetSound\0")?,
                add_button: symbol(&library, b"PortmasterToastAddButton\0")?,
                show: symbol(&library, b"PortmasterToastShow\0")?,
                hide: symbol(&library, b"PortmasterToastHide\0")?,
                _library: library,
            })
        }
    }
}

/// Resolve `name` and copy the function pointer out of the symbol.
///
/// # Safety
/// `T` must be the exact function pointer type of the export.
unsafe fn symbol<T: Copy>(library: &Library, name: &[u8]) -> Result<T, FacilityError> {
    let symbol = library.get::<T>(name).map_err(|e| {
        FacilityError::Load(format!(
            "missing symbol {}: {}",
            String::from_utf8_lossy(name.strip_suffix(b"\0").unwrap_or(name)),
            e
        ))
    })?;
    Ok(*symbol)
}

/// NUL-terminated UTF-16 copy of `s`.
pub fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Interpret a status code as success or failure.
pub fn check(status: i32, error: impl FnOnce(String) -> FacilityError) -> Result<(), FacilityError> {
    if status == 0 {
        Ok(())
    } else {
        Err(error(format!("native status {}", status)))
    }
}
