//! Logger setup
//!
//! Diagnostics go through the `log` facade. The binary installs
//! `env_logger`; `RUST_LOG` overrides the level chosen here.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the process logger. Later calls are ignored.
pub fn init_logger(verbose: bool) {
    let level = default_level(verbose).to_string().to_lowercase();
    let result = Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .format_target(false)
        .try_init();

    if result.is_err() {
        log::debug!("logger already installed");
    }
}
