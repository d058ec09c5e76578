//! Dismissal reasons reported by the native facility

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidDismissalReasonError;

/// Why a notification left the screen.
///
/// The first three map to the codes the native facility passes to its
/// dismissal callback. `Failed` is reported through the failure callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissalReason {
    UserCanceled,
    ApplicationHidden,
    TimedOut,
    Failed,
    Unknown(i32),
}

impl DismissalReason {
    /// Map a raw dismissal callback code.
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::UserCanceled,
            1 => Self::ApplicationHidden,
            2 => Self::TimedOut,
            other => Self::Unknown(other),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserCanceled => "user_canceled",
            Self::ApplicationHidden => "application_hidden",
            Self::TimedOut => "timed_out",
            Self::Failed => "failed",
            Self::Unknown(_) => "unknown",
        }
    }

    /// All named reasons
    pub const fn all() -> &'static [DismissalReason] {
        &[
            Self::UserCanceled,
            Self::ApplicationHidden,
            Self::TimedOut,
            Self::Failed,
        ]
    }
}

impl FromStr for DismissalReason {
    type Err = InvalidDismissalReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user_canceled" => Ok(Self::UserCanceled),
            "application_hidden" => Ok(Self::ApplicationHidden),
            "timed_out" => Ok(Self::TimedOut),
            "failed" => Ok(Self::Failed),
            _ => Err(InvalidDismissalReasonError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DismissalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "unknown({})", code),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
