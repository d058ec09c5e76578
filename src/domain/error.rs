//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>h, <number>m, <number>s or a combination (e.g., 30s, 5m, 1h30m)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when parsing an `id:label` action definition
#[derive(Debug, Clone, Error)]
#[error("Invalid action: \"{input}\". Expected format: <id>:<label> (e.g., open:Open)")]
pub struct ActionParseError {
    pub input: String,
}

/// Error when an unknown dismissal reason name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid dismissal reason: \"{input}\". Valid reasons are: user_canceled, application_hidden, timed_out, failed")]
pub struct InvalidDismissalReasonError {
    pub input: String,
}

/// Error when an unknown sound profile name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid sound: \"{input}\". Valid sounds are: default, silent, loop")]
pub struct InvalidSoundError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
