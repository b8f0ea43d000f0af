// SPDX-License-Identifier: MPL-2.0
//! Shared handle for recording diagnostic warnings.

use std::sync::{Arc, Mutex, PoisonError};

use super::buffer::CircularBuffer;
use super::events::{WarningEvent, WarningKind};

/// Handle for recording diagnostic warnings.
///
/// This handle is cheap to clone and can be shared across components; all
/// clones write to the same bounded buffer. Recording never blocks on I/O
/// and never fails — when the buffer is full the oldest warning is evicted.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<WarningEvent>>>,
}

impl DiagnosticsHandle {
    /// Creates a handle with the default retention capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle retaining at most `capacity` warnings.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a warning event.
    pub fn log_warning(&self, event: WarningEvent) {
        // A poisoned lock only means another thread panicked mid-push;
        // the buffer contents remain structurally valid.
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.push(event);
    }

    /// Records a simple warning message under [`WarningKind::Other`].
    pub fn log_warning_simple(&self, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(WarningKind::Other, message));
    }

    /// Returns a snapshot of the retained warnings, oldest first.
    #[must_use]
    pub fn warnings(&self) -> Vec<WarningEvent> {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.iter().cloned().collect()
    }

    /// Returns the number of retained warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.len()
    }

    /// Returns true if no warnings have been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all retained warnings.
    pub fn clear(&self) {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::new();
        let clone = handle.clone();

        clone.log_warning_simple("from the clone");

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.warnings()[0].message, "from the clone");
    }

    #[test]
    fn capacity_bounds_retention() {
        let handle = DiagnosticsHandle::with_capacity(2);
        handle.log_warning_simple("first");
        handle.log_warning_simple("second");
        handle.log_warning_simple("third");

        let warnings = handle.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message, "second");
        assert_eq!(warnings[1].message, "third");
    }

    #[test]
    fn clear_empties_retained_warnings() {
        let handle = DiagnosticsHandle::new();
        handle.log_warning_simple("stale");
        handle.clear();
        assert!(handle.is_empty());
    }
}
