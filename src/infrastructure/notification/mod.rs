//! Notification infrastructure module
//!
//! Desktop notifications go through notify-rust, with notify-send as a
//! fallback on Linux. The console notifier is used when desktop
//! notifications are turned off.

mod console;
mod notify_rust;
mod notify_send;

pub use console::ConsoleNotifier;
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use async_trait::async_trait;

use crate::application::ports::{NotificationError, NotificationIcon, Notifier};

/// Tries `primary`, then `fallback` if the primary fails
pub struct FallbackNotifier<P: Notifier, F: Notifier> {
    primary: P,
    fallback: F,
}

impl<P: Notifier, F: Notifier> FallbackNotifier<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: Notifier, F: Notifier> Notifier for FallbackNotifier<P, F> {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        match self.primary.notify(title, message, icon).await {
            Ok(()) => Ok(()),
            Err(_) => self.fallback.notify(title, message, icon).await,
        }
    }
}

/// Create the notifier for the current platform
pub fn create_notifier(desktop: bool) -> Box<dyn Notifier> {
    if !desktop {
        return Box::new(ConsoleNotifier::new());
    }

    if cfg!(target_os = "linux") {
        Box::new(FallbackNotifier::new(
            NotifyRustNotifier::new(),
            NotifySendNotifier::new(),
        ))
    } else {
        Box::new(NotifyRustNotifier::new())
    }
}
