//! Data directory path resolution adapter

use std::env::consts;
use std::path::{Path, PathBuf};

use crate::application::ports::{PathError, PlatformPaths};
use crate::domain::config::AppConfig;

/// Resolves native files below the configured data directory.
///
/// Layout:
/// - library: `<data_dir>/updates/<os>_<arch>/<library>`
/// - icon: the configured icon, or `<data_dir>/icons/<app-name>.ico`
#[derive(Debug, Clone)]
pub struct DataDirPaths {
    data_dir: Option<PathBuf>,
    library: String,
    icon: Option<PathBuf>,
    app_name: String,
}

impl DataDirPaths {
    pub fn new(data_dir: Option<PathBuf>, library: impl Into<String>) -> Self {
        Self {
            data_dir,
            library: library.into(),
            icon: None,
            app_name: String::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            data_dir: config.data_dir_path(),
            library: config.library_or_default().to_string(),
            icon: config.icon_path(),
            app_name: config.identity().app_name,
        }
    }

    /// Use an explicit icon instead of the one in the data directory
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    fn data_dir(&self) -> Result<&Path, PathError> {
        self.data_dir.as_deref().ok_or(PathError::EmptyDataDir)
    }
}

impl PlatformPaths for DataDirPaths {
    fn resolve_library_path(&self) -> Result<PathBuf, PathError> {
        let path = self
            .data_dir()?
            .join("updates")
            .join(platform_identifier(&self.library));
        existing(path)
    }

    fn resolve_icon_path(&self) -> Result<PathBuf, PathError> {
        if let Some(icon) = &self.icon {
            return existing(icon.clone());
        }
        let path = self
            .data_dir()?
            .join("icons")
            .join(format!("{}.ico", icon_stem(&self.app_name)));
        existing(path)
    }
}

/// Prefix a data directory relative path with `<os>_<arch>`.
pub fn platform_identifier(relative: &str) -> String {
    let arch = match consts::ARCH {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        other => other,
    };
    format!("{}_{}/{}", consts::OS, arch, relative)
}

fn icon_stem(app_name: &str) -> String {
    let stem: String = app_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    if stem.is_empty() {
        "app".to_string()
    } else {
        stem
    }
}

fn existing(path: PathBuf) -> Result<PathBuf, PathError> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(PathError::NotFound(path))
    }
}
