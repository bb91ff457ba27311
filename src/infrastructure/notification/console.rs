//! Terminal notification adapter

use async_trait::async_trait;
use colored::Colorize;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Writes notifications to stderr instead of the desktop
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn format(title: &str, message: &str, icon: NotificationIcon) -> String {
        let glyph = match icon {
            NotificationIcon::Info => "ℹ".cyan(),
            NotificationIcon::Success => "✓".green(),
            NotificationIcon::Error => "✗".red(),
        };
        format!("{} {}: {}", glyph, title.bold(), message)
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        eprintln!("{}", Self::format(title, message, icon));
        Ok(())
    }
}
