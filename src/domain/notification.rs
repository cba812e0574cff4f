use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Error,
}

/// A toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub variant: Variant,
    pub title: String,
    pub description: Option<String>,
    /// Raw error behind an error toast, if any.
    pub error: Option<ErrorKind>,
    pub auto_close: bool,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            variant: Variant::Success,
            title: title.into(),
            description: None,
            error: None,
            auto_close: true,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            variant: Variant::Error,
            ..Self::success(title)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_error(mut self, error: ErrorKind) -> Self {
        self.error = Some(error);
        self
    }

    /// Keeps the toast on screen until dismissed.
    pub fn sticky(mut self) -> Self {
        self.auto_close = false;
        self
    }
}
