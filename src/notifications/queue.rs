// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The queue owns the set of live notifications and their auto-dismiss
//! timers. Each pending expiry is a spawned sleep task whose abort handle is
//! kept in an id-keyed map next to the item, so cancellation is a direct
//! lookup-and-abort; no timer callback closes over queue internals. Timer
//! tasks hold only a weak reference to the queue state, so a task that
//! outlives the queue finds nothing to mutate.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::AbortHandle;

use super::notification::{DismissReason, Notification, NotificationId, Status};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningKind};

/// Owns the live notification collection and its timer bookkeeping.
///
/// Cloning is cheap and every clone observes the same state. Auto-hide
/// scheduling uses the ambient tokio runtime, so [`enqueue`] must run
/// inside one whenever a finite auto-hide duration is in play.
///
/// The queue imposes no capacity by default: sustained enqueues without
/// matching dismissals grow memory without bound, which is the caller's
/// responsibility to avoid. Passing `max_visible` bounds the *visible* set
/// only; overflow waits in insertion order for a free slot.
///
/// [`enqueue`]: NotificationQueue::enqueue
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    state: Arc<Mutex<QueueState>>,
}

#[derive(Debug)]
struct QueueState {
    /// Currently visible notifications, in insertion order.
    visible: VecDeque<Notification>,
    /// Overflow held back by `max_visible`, in insertion order.
    waiting: VecDeque<Notification>,
    /// Abort handles for pending auto-hide timers, keyed by id.
    timers: HashMap<NotificationId, AbortHandle>,
    /// Optional cap on the visible set.
    max_visible: Option<usize>,
    /// Auto-hide duration applied when a notification requests the default.
    default_auto_hide: Duration,
    /// Optional diagnostics handle for pressure warnings.
    diagnostics: Option<DiagnosticsHandle>,
    /// Publishes the visible set to the presentation consumer.
    snapshot_tx: watch::Sender<Vec<Notification>>,
    /// Handed to timer tasks; `Weak::new()` only during construction.
    weak_self: Weak<Mutex<QueueState>>,
}

impl NotificationQueue {
    /// Creates a queue with the given default auto-hide duration and
    /// optional visible-set cap.
    #[must_use]
    pub fn new(default_auto_hide: Duration, max_visible: Option<usize>) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        let state = Arc::new(Mutex::new(QueueState {
            visible: VecDeque::new(),
            waiting: VecDeque::new(),
            timers: HashMap::new(),
            max_visible,
            default_auto_hide,
            diagnostics: None,
            snapshot_tx,
            weak_self: Weak::new(),
        }));
        lock(&state).weak_self = Arc::downgrade(&state);
        Self { state }
    }

    /// Sets the diagnostics handle for pressure warnings.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        lock(&self.state).diagnostics = Some(handle);
    }

    /// Enqueues a notification and returns its id synchronously.
    ///
    /// The notification becomes visible immediately unless the visible set
    /// is capped and full, in which case it waits in `Pending` status and
    /// is promoted in FIFO order when a slot frees. The auto-hide timer is
    /// scheduled when the notification becomes visible, not before.
    pub fn enqueue(&self, mut notification: Notification) -> NotificationId {
        let id = notification.id();
        notification.set_status(Status::Pending);

        let mut state = lock(&self.state);
        let at_capacity = state
            .max_visible
            .is_some_and(|cap| state.visible.len() >= cap);
        if at_capacity {
            if state.waiting.is_empty() {
                if let Some(diagnostics) = &state.diagnostics {
                    diagnostics.log_warning(WarningEvent::new(
                        WarningKind::QueueSaturated,
                        "visible set is full; enqueued notifications are being held back",
                    ));
                }
            }
            state.waiting.push_back(notification);
        } else {
            state.activate(notification);
        }
        state.publish();
        id
    }

    /// Dismisses a notification by id.
    ///
    /// Unknown or already-removed ids are a silent no-op, not an error.
    /// A `Clickaway` reason never dismisses: the item stays visible and its
    /// timer keeps running. Returns `true` if the notification was removed.
    pub fn dismiss(&self, id: NotificationId, reason: DismissReason) -> bool {
        dismiss_shared(&self.state, id, reason)
    }

    /// Removes every live and waiting notification and aborts their timers.
    pub fn clear(&self) {
        let mut state = lock(&self.state);
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
        state.visible.clear();
        state.waiting.clear();
        state.publish();
    }

    /// Returns a snapshot of the visible set, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        lock(&self.state).visible.iter().cloned().collect()
    }

    /// Returns a receiver that observes every change to the visible set.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        lock(&self.state).snapshot_tx.subscribe()
    }

    /// Returns the lifecycle status of a live notification, or `None` once
    /// it has been removed.
    #[must_use]
    pub fn status_of(&self, id: NotificationId) -> Option<Status> {
        let state = lock(&self.state);
        state
            .visible
            .iter()
            .chain(state.waiting.iter())
            .find(|n| n.id() == id)
            .map(Notification::status)
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        lock(&self.state).visible.len()
    }

    /// Returns the number of notifications held back by the cap.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        lock(&self.state).waiting.len()
    }

    /// Returns whether any notification is live (visible or waiting).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        let state = lock(&self.state);
        !state.visible.is_empty() || !state.waiting.is_empty()
    }
}

impl QueueState {
    /// Makes a notification visible and schedules its auto-hide timer.
    fn activate(&mut self, mut notification: Notification) {
        let id = notification.id();
        let delay = notification
            .auto_hide_policy()
            .resolve(self.default_auto_hide);
        notification.set_status(Status::Visible);
        self.visible.push_back(notification);

        if let Some(delay) = delay {
            let weak = self.weak_self.clone();
            let task = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Some(state) = weak.upgrade() {
                    dismiss_shared(&state, id, DismissReason::Timeout);
                }
            });
            self.timers.insert(id, task.abort_handle());
        }
    }

    /// Promotes waiting notifications while the visible set has room.
    fn promote_from_waiting(&mut self) {
        let Some(cap) = self.max_visible else { return };
        while self.visible.len() < cap {
            match self.waiting.pop_front() {
                Some(notification) => self.activate(notification),
                None => break,
            }
        }
    }

    fn publish(&mut self) {
        let snapshot: Vec<Notification> = self.visible.iter().cloned().collect();
        self.snapshot_tx.send_replace(snapshot);
    }
}

impl Drop for QueueState {
    fn drop(&mut self) {
        for timer in self.timers.values() {
            timer.abort();
        }
    }
}

// A poisoned lock only means a panic mid-update; the collection itself
// stays structurally valid.
fn lock(state: &Arc<Mutex<QueueState>>) -> MutexGuard<'_, QueueState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared dismissal path for API calls and timer tasks.
fn dismiss_shared(state: &Arc<Mutex<QueueState>>, id: NotificationId, reason: DismissReason) -> bool {
    if reason == DismissReason::Clickaway {
        return false;
    }

    let mut state = lock(state);

    if let Some(pos) = state.visible.iter().position(|n| n.id() == id) {
        if let Some(timer) = state.timers.remove(&id) {
            timer.abort();
        }
        if let Some(mut notification) = state.visible.remove(pos) {
            notification.set_status(Status::Dismissing);
            notification.set_status(Status::Removed);
        }
        state.promote_from_waiting();
        state.publish();
        return true;
    }

    if let Some(pos) = state.waiting.iter().position(|n| n.id() == id) {
        if let Some(mut notification) = state.waiting.remove(pos) {
            notification.set_status(Status::Removed);
        }
        state.publish();
        return true;
    }

    false
}
