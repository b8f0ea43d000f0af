// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for capturing engine misuse warnings.
//!
//! The engine's error-handling contract makes most misuse a silent no-op
//! (unknown ids, post-teardown calls). The conditions that deserve a
//! development-time signal — mixing controlled and uncontrolled value
//! sources, a capped queue under pressure — are recorded here instead of
//! being raised as runtime failures.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`WarningEvent`] / [`WarningKind`]: Captured warning records
//! - [`DiagnosticsHandle`]: Cheap-to-clone handle components carry

mod buffer;
mod events;
mod handle;

pub use buffer::{CircularBuffer, DEFAULT_BUFFER_CAPACITY};
pub use events::{WarningEvent, WarningKind};
pub use handle::DiagnosticsHandle;
