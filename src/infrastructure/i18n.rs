use crate::config::ConsentMessages;
use crate::domain::ports::ErrorTranslator;
use crate::error::ErrorKind;

/// Translates transport errors with the configured labels.
pub struct MessageTranslator {
    messages: ConsentMessages,
}

impl MessageTranslator {
    pub fn new(messages: ConsentMessages) -> Self {
        Self { messages }
    }
}

impl ErrorTranslator for MessageTranslator {
    fn translate(&self, error: &ErrorKind) -> String {
        match error {
            // Rejections carry a backend message meant for the user.
            ErrorKind::Rejection { message, .. } if !message.is_empty() => message.clone(),
            _ => self
                .messages
                .error_labels
                .get(error.code())
                .cloned()
                .unwrap_or_else(|| self.messages.fallback_error.clone()),
        }
    }
}
