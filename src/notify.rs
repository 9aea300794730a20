//! Best-effort desktop notifications.
//!
//! The notifier is injected into the pipeline as a trait object so that tests
//! observe notification calls without touching OS notification APIs.

use log::debug;

/// A sink for short title + body notifications.
///
/// Implementations are fire-and-forget: delivery failure must never affect
/// the run outcome.
pub trait Notifier {
    /// Attempts to display a notification.
    fn notify(&self, title: &str, body: &str);
}

/// Sends notifications through the operating system's notification service.
///
/// On hosts without a notification daemon (headless CI, containers) the
/// delivery error is logged at debug level and otherwise ignored, degrading
/// to a no-op.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        if let Err(err) = notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .show()
        {
            debug!("Desktop notification unavailable: {err}");
        }
    }
}

/// Discards all notifications.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}
