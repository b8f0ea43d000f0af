// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with the
//! `Severity`, `Status`, `AutoHide`, and `DismissReason` enums used
//! throughout the notification system.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are minted from a process-wide counter and are never reused for the
/// lifetime of the process, so a stale id held after removal can never
/// alias a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
}

/// Lifecycle state of a notification.
///
/// Transitions run strictly forward: `Pending → Visible → Dismissing →
/// Removed`. With an unbounded queue `Pending` and `Dismissing` are passed
/// through without observable delay; they exist so a capped queue can hold
/// items back and a presentation layer can attach exit animations without
/// changing this contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Created but not yet visible (waiting for a visible slot).
    Pending,
    /// Currently part of the visible set.
    Visible,
    /// Dismissal accepted; about to be removed.
    Dismissing,
    /// Removed from the live collection. Terminal.
    Removed,
}

/// Auto-hide policy for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoHide {
    /// Use the configured default duration.
    #[default]
    Default,
    /// Hide after the given duration. `Duration::ZERO` means persistent.
    After(Duration),
    /// Stay until explicitly dismissed.
    Persistent,
}

impl AutoHide {
    /// Resolves the policy against the configured default duration.
    ///
    /// Returns `None` when the notification should never auto-dismiss.
    #[must_use]
    pub fn resolve(self, default: Duration) -> Option<Duration> {
        match self {
            AutoHide::Default => Some(default),
            AutoHide::After(d) if d.is_zero() => None,
            AutoHide::After(d) => Some(d),
            AutoHide::Persistent => None,
        }
    }
}

/// Why a dismissal was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The auto-hide timer expired.
    Timeout,
    /// The user activated the notification's close affordance.
    CloseButton,
    /// Programmatic `hide` call.
    Programmatic,
    /// The user clicked elsewhere while the notification was visible.
    ///
    /// Never honored as a dismissal: information should not vanish because
    /// the user interacted with something unrelated.
    Clickaway,
}

/// A notification owned by the queue.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level.
    severity: Severity,
    /// Display text. Opaque to the engine; the presentation layer decides
    /// how to render it.
    message: String,
    /// Auto-hide policy.
    auto_hide: AutoHide,
    /// Current lifecycle state.
    status: Status,
    /// Whether the presentation layer should render a close affordance.
    closable: bool,
    /// When this notification was created (monotonic).
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            auto_hide: AutoHide::Default,
            status: Status::Pending,
            closable: true,
            created_at: Instant::now(),
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets the auto-hide duration. `Duration::ZERO` means persistent.
    #[must_use]
    pub fn auto_hide(mut self, duration: Duration) -> Self {
        self.auto_hide = AutoHide::After(duration);
        self
    }

    /// Marks the notification as persistent (manual dismiss only).
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_hide = AutoHide::Persistent;
        self
    }

    /// Sets whether the presentation layer should render a close affordance.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the auto-hide policy.
    #[must_use]
    pub fn auto_hide_policy(&self) -> AutoHide {
        self.auto_hide
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns whether a close affordance should be rendered.
    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // Transitions are driven exclusively by queue-internal logic.
    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
