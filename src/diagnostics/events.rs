// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for engine misuse and pressure conditions.

use std::time::Instant;

/// Category of a diagnostic warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// An externally supplied value was pushed into a resolver that owns
    /// its value internally. The authoritative value is ambiguous from
    /// that point on.
    MixedValueSource,
    /// A capped notification queue started holding enqueued items back.
    QueueSaturated,
    /// Uncategorized warning.
    Other,
}

/// A warning captured during engine operation.
///
/// Warnings describe conditions that are inconsistent but not fatal; the
/// engine keeps running and retains them for development-time inspection.
#[derive(Debug, Clone)]
pub struct WarningEvent {
    /// Warning category.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
    /// When the warning was captured (monotonic).
    pub at: Instant,
}

impl WarningEvent {
    /// Creates a new warning event timestamped now.
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            at: Instant::now(),
        }
    }
}
