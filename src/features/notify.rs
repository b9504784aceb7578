//! Desktop notifications for phase transitions.

use notify_rust::{Notification, Timeout};

use crate::config::NotificationConfig;
use crate::error::TomatickError;
use crate::features::timer::PhaseTransition;

/// Something that can show a titled message to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Show a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification backend rejects the message.
    fn notify(&self, title: &str, message: &str) -> Result<(), TomatickError>;
}

/// Notifier backed by the platform notification service.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    enabled: bool,
    app_name: String,
    timeout_ms: u32,
}

impl DesktopNotifier {
    #[must_use]
    pub fn from_config(config: &NotificationConfig) -> Self {
        Self {
            enabled: config.enabled,
            app_name: config.app_name.clone(),
            timeout_ms: config.timeout_ms,
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), TomatickError> {
        if !self.enabled {
            tracing::debug!(title, "notifications disabled, skipping");
            return Ok(());
        }

        Notification::new()
            .summary(title)
            .body(message)
            .appname(&self.app_name)
            .timeout(Timeout::Milliseconds(self.timeout_ms))
            .show()
            .map(drop)
            .map_err(|e| TomatickError::Notification(e.to_string()))
    }
}

/// Notify about a finished phase. Failures are logged and swallowed so a
/// missing notification daemon never stops the countdown.
pub fn announce(notifier: &dyn Notifier, transition: &PhaseTransition) {
    if let Err(e) = notifier.notify(transition.title(), transition.message()) {
        tracing::warn!(error = %e, from = %transition.from, "failed to show notification");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::Phase;
    use mockall::predicate::eq;

    fn focus_done() -> PhaseTransition {
        PhaseTransition {
            from: Phase::Focus,
            to: Phase::Break,
            cycles: 1,
        }
    }

    #[test]
    fn test_announce_focus_done() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .with(
                eq("Pomodoro Complete!"),
                eq("Great job! Time for a well-deserved break! 🎉"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        announce(&mock, &focus_done());
    }

    #[test]
    fn test_announce_break_done() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .with(
                eq("Break Complete!"),
                eq("Ready to focus? Let's get back to work! 💪"),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let transition = PhaseTransition {
            from: Phase::Break,
            to: Phase::Focus,
            cycles: 1,
        };
        announce(&mock, &transition);
    }

    #[test]
    fn test_announce_swallows_failure() {
        let mut mock = MockNotifier::new();
        mock.expect_notify()
            .times(1)
            .returning(|_, _| Err(TomatickError::Notification("no daemon".to_string())));

        announce(&mock, &focus_done());
    }

    #[test]
    fn test_disabled_desktop_notifier_is_silent() {
        let config = NotificationConfig {
            enabled: false,
            ..NotificationConfig::default()
        };
        let notifier = DesktopNotifier::from_config(&config);
        assert!(notifier.notify("title", "body").is_ok());
    }
}
