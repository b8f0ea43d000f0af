// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: Notification auto-dismiss timing bounds
//! - **Debounce**: Input quiescence window bounds

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default auto-hide duration for notifications (in milliseconds).
pub const DEFAULT_AUTO_HIDE_MS: u64 = 6000;

/// Minimum allowed auto-hide duration (in milliseconds).
///
/// Anything shorter would disappear before a user can read it.
pub const MIN_AUTO_HIDE_MS: u64 = 500;

/// Maximum allowed auto-hide duration (in milliseconds).
pub const MAX_AUTO_HIDE_MS: u64 = 60_000;

// ==========================================================================
// Debounce Defaults
// ==========================================================================

/// Default quiescence window for debounced inputs (in milliseconds).
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 300;

/// Minimum allowed debounce window (in milliseconds).
///
/// Zero is valid and means synchronous emission.
pub const MIN_DEBOUNCE_WINDOW_MS: u64 = 0;

/// Maximum allowed debounce window (in milliseconds).
pub const MAX_DEBOUNCE_WINDOW_MS: u64 = 5000;
