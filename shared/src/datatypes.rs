use serde::{Deserialize, Serialize};

/// Shown whenever a submission fails, regardless of what the server reported.
pub const INVALID_INPUT_MESSAGE: &str = "Please Enter Valid Url Or Slug";
/// Shown after every click on the copy action.
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message for the user, produced by the form transitions and displayed by the ui.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
}

impl Notification {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn invalid_input() -> Self {
        Self::error(INVALID_INPUT_MESSAGE)
    }

    #[must_use]
    pub fn copied() -> Self {
        Self::success(COPIED_MESSAGE)
    }

    /// The notification for an `error` query parameter the page was opened with.
    ///
    /// An absent or empty parameter produces nothing.
    #[must_use]
    pub fn from_query_error(error: Option<&str>) -> Option<Self> {
        error.filter(|e| !e.is_empty()).map(Self::error)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NotificationLevel::Error)
    }
}
