//! WinToast native facility
//!
//! Loads the WinToast glue library at runtime and exposes it through the
//! facility port. Library loading is plain `libloading`, so the adapter
//! builds everywhere; only Windows ships the library itself.

mod api;
mod callbacks;
mod facility;

pub use facility::{WinToastBuilder, WinToastFacility, WinToastLoader};
