//! Notification sound profile

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSoundError;

/// Sound played when a notification appears.
/// Discriminants are the native facility's sound option codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundProfile {
    #[default]
    Default = 0,
    Silent = 1,
    Loop = 2,
}

impl SoundProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Silent => "silent",
            Self::Loop => "loop",
        }
    }

    pub const fn code(&self) -> i32 {
        *self as i32
    }
}

impl FromStr for SoundProfile {
    type Err = InvalidSoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "silent" => Ok(Self::Silent),
            "loop" => Ok(Self::Loop),
            _ => Err(InvalidSoundError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SoundProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which system sound file backs the profile. Only the default is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundPath {
    #[default]
    Default = 0,
}

impl SoundPath {
    pub const fn code(&self) -> i32 {
        *self as i32
    }
}
