// SPDX-License-Identifier: MPL-2.0
//! Public façade for showing and hiding notifications.
//!
//! The dispatcher is an explicitly constructed object: the host product
//! creates exactly one at its composition root and passes clones down to
//! whoever needs to show notifications. There is no ambient global; state
//! consistency across call sites comes from every clone sharing the same
//! underlying queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use super::notification::{AutoHide, DismissReason, Notification, NotificationId, Severity};
use super::queue::NotificationQueue;
use crate::config::Config;
use crate::diagnostics::DiagnosticsHandle;
use crate::error::{Error, Result};

/// Options accepted by [`Dispatcher::show`].
#[derive(Debug, Clone, Copy)]
pub struct ShowOptions {
    /// Severity level. Defaults to [`Severity::Info`].
    pub severity: Severity,
    /// Auto-hide policy. Defaults to the configured duration.
    pub auto_hide: AutoHide,
    /// Whether the presentation layer should render a close affordance.
    pub closable: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowOptions {
    /// Creates options with default values (info severity, default
    /// auto-hide, closable).
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Info,
            auto_hide: AutoHide::Default,
            closable: true,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets an explicit auto-hide duration. `Duration::ZERO` means
    /// persistent.
    #[must_use]
    pub fn auto_hide(mut self, duration: Duration) -> Self {
        self.auto_hide = AutoHide::After(duration);
        self
    }

    /// Keeps the notification until it is explicitly dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_hide = AutoHide::Persistent;
        self
    }

    /// Sets whether a close affordance should be rendered.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Thin façade over [`NotificationQueue`].
///
/// Cheap to clone; all clones share one queue, so no two call sites can
/// observe divergent state. The visible set feeds exactly one presentation
/// consumer, claimed once through [`Dispatcher::subscribe`].
#[derive(Clone, Debug)]
pub struct Dispatcher {
    queue: NotificationQueue,
    subscriber_taken: Arc<AtomicBool>,
}

impl Dispatcher {
    /// Creates a dispatcher from the engine configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_queue(NotificationQueue::new(
            config.auto_hide(),
            config.max_visible,
        ))
    }

    /// Creates a dispatcher over an existing queue.
    #[must_use]
    pub fn with_queue(queue: NotificationQueue) -> Self {
        Self {
            queue,
            subscriber_taken: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shows a notification and returns its id.
    pub fn show(&self, message: impl Into<String>, options: ShowOptions) -> NotificationId {
        let notification = Notification::new(options.severity, message).closable(options.closable);
        let notification = match options.auto_hide {
            AutoHide::Default => notification,
            AutoHide::After(duration) => notification.auto_hide(duration),
            AutoHide::Persistent => notification.persistent(),
        };
        self.queue.enqueue(notification)
    }

    /// Hides a notification. Unknown ids are silently ignored.
    pub fn hide(&self, id: NotificationId) {
        self.queue.dismiss(id, DismissReason::Programmatic);
    }

    /// Reports a dismissal request with an explicit reason, as issued by
    /// the presentation layer (close buttons, clickaway reporting).
    pub fn dismiss(&self, id: NotificationId, reason: DismissReason) {
        self.queue.dismiss(id, reason);
    }

    /// Removes every live notification.
    pub fn clear(&self) {
        self.queue.clear();
    }

    /// Returns a snapshot of the visible set, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue.snapshot()
    }

    /// Claims the presentation subscription.
    ///
    /// The receiver observes every change to the visible set. Only one
    /// consumer may exist per dispatcher; a second call returns
    /// [`Error::SubscriberTaken`].
    pub fn subscribe(&self) -> Result<watch::Receiver<Vec<Notification>>> {
        if self.subscriber_taken.swap(true, Ordering::SeqCst) {
            return Err(Error::SubscriberTaken);
        }
        Ok(self.queue.subscribe())
    }

    /// Sets the diagnostics handle for the underlying queue.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        self.queue.set_diagnostics(handle);
    }

    /// Returns the underlying queue.
    #[must_use]
    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }
}
