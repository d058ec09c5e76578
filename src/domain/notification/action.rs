//! Notification action value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ActionParseError;

/// A labeled button offered on a notification.
///
/// `id` is what the application reacts to, `text` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: String,
    pub text: String,
}

impl Action {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parse an `id:label` pair. The label may itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, text) = s.split_once(':').ok_or_else(|| ActionParseError {
            input: s.to_string(),
        })?;
        let (id, text) = (id.trim(), text.trim());
        if id.is_empty() || text.is_empty() {
            return Err(ActionParseError {
                input: s.to_string(),
            });
        }
        Ok(Self::new(id, text))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.text)
    }
}
