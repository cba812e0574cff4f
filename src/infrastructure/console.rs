use crate::domain::notification::{Notification, Variant};
use crate::domain::ports::{Navigator, Notifier};
use crate::domain::route::Route;
use std::io::Write;
use tracing::warn;

/// Prints navigation effects to stdout, one line each.
pub struct ConsoleNavigator {
    origin: String,
}

impl ConsoleNavigator {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

fn emit(line: String) {
    if let Err(e) = writeln!(std::io::stdout().lock(), "{line}") {
        warn!(error = %e, "Failed to write effect to stdout");
    }
}

impl Navigator for ConsoleNavigator {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn replace(&self, route: Route) {
        emit(format!("navigate replace {} {}", route.name(), route.path()));
    }

    fn assign(&self, url: &str) {
        emit(format!("navigate assign {url}"));
    }
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, notification: Notification) {
        let variant = match notification.variant {
            Variant::Success => "success",
            Variant::Error => "error",
        };
        let mut line = format!("notify {variant}: {}", notification.title);
        if let Some(description) = &notification.description {
            line.push_str(" - ");
            line.push_str(description);
        }
        emit(line);
    }
}
