//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::identity::AppIdentity;
use crate::domain::notification::{DismissalReason, SoundProfile};

pub const DEFAULT_APP_NAME: &str = "Toast Notifier";
pub const DEFAULT_VENDOR: &str = "Toast Notifier Contributors";
pub const DEFAULT_PRODUCT: &str = "Toast Notifier";
pub const DEFAULT_SUB_PRODUCT: &str = "notifier";
pub const DEFAULT_LIBRARY: &str = "notifier/portmaster-wintoast.dll";

/// Dismissal reasons that release a notification unless configured otherwise.
/// `application_hidden` is left out: it only follows our own cancel.
pub const DEFAULT_RELEASE_ON: &[&str] = &["user_canceled", "timed_out", "failed"];

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub data_dir: Option<String>,
    pub library: Option<String>,
    pub icon: Option<String>,
    pub app_name: Option<String>,
    pub vendor: Option<String>,
    pub product: Option<String>,
    pub sub_product: Option<String>,
    pub version: Option<String>,
    pub sound: Option<String>,
    pub launch_command: Option<String>,
    pub release_on: Option<Vec<String>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            data_dir: None,
            library: Some(DEFAULT_LIBRARY.to_string()),
            icon: None,
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            vendor: Some(DEFAULT_VENDOR.to_string()),
            product: Some(DEFAULT_PRODUCT.to_string()),
            sub_product: Some(DEFAULT_SUB_PRODUCT.to_string()),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            sound: Some(SoundProfile::Default.to_string()),
            launch_command: None,
            release_on: Some(DEFAULT_RELEASE_ON.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            library: other.library.or(self.library),
            icon: other.icon.or(self.icon),
            app_name: other.app_name.or(self.app_name),
            vendor: other.vendor.or(self.vendor),
            product: other.product.or(self.product),
            sub_product: other.sub_product.or(self.sub_product),
            version: other.version.or(self.version),
            sound: other.sound.or(self.sound),
            launch_command: other.launch_command.or(self.launch_command),
            release_on: other.release_on.or(self.release_on),
        }
    }

    /// Data directory, or None when unset or blank
    pub fn data_dir_path(&self) -> Option<PathBuf> {
        self.data_dir
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    pub fn library_or_default(&self) -> &str {
        self.library.as_deref().unwrap_or(DEFAULT_LIBRARY)
    }

    pub fn icon_path(&self) -> Option<PathBuf> {
        self.icon
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Get sound as parsed SoundProfile, or default if not set/invalid
    pub fn sound_or_default(&self) -> SoundProfile {
        self.sound
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn launch_command(&self) -> Option<&str> {
        self.launch_command
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// Dismissal reasons that release a registry entry.
    /// Unknown names are skipped; an unset list falls back to the defaults.
    pub fn release_on_or_default(&self) -> Vec<DismissalReason> {
        match &self.release_on {
            Some(names) => names.iter().filter_map(|s| s.parse().ok()).collect(),
            None => DEFAULT_RELEASE_ON
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect(),
        }
    }

    /// Application identity with defaults filled in
    pub fn identity(&self) -> AppIdentity {
        AppIdentity {
            app_name: self
                .app_name
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            vendor: self
                .vendor
                .clone()
                .unwrap_or_else(|| DEFAULT_VENDOR.to_string()),
            product: self
                .product
                .clone()
                .unwrap_or_else(|| DEFAULT_PRODUCT.to_string()),
            sub_product: self
                .sub_product
                .clone()
                .unwrap_or_else(|| DEFAULT_SUB_PRODUCT.to_string()),
            version: self
                .version
                .clone()
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}
