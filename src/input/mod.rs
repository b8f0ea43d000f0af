// SPDX-License-Identifier: MPL-2.0
//! Ephemeral input-value synchronization.
//!
//! Two cooperating pieces:
//!
//! - [`resolver`] - decides who owns the authoritative value for a bound
//!   input (the caller or the binding) and routes edits accordingly
//! - [`debounce`] - collapses a rapid series of edits into a single settled
//!   emission after a quiescence window
//!
//! A typical wiring forwards resolver output into a debounced binding, so
//! the consumer sees one settled value per burst of typing:
//!
//! ```no_run
//! use feedback_engine::input::{bind_debounced_input, ValueResolver};
//! use std::time::Duration;
//!
//! let search = bind_debounced_input(Duration::from_millis(300), |settled| {
//!     println!("query: {settled}");
//! });
//!
//! let mut resolver = ValueResolver::uncontrolled("", {
//!     let search = search.clone();
//!     move |value| search.update(value)
//! });
//!
//! resolver.handle_edit("r");
//! resolver.handle_edit("ru");
//! resolver.handle_edit("rust");
//! // 300ms of quiet later, the consumer sees exactly "rust".
//! ```

pub mod debounce;
pub mod resolver;

pub use debounce::{DebouncedInput, SettledCallback};
pub use resolver::{ChangeCallback, ValueResolver};

use std::time::Duration;

/// Binds a debounced input with the given quiescence window.
///
/// Convenience constructor for [`DebouncedInput::bind`].
#[must_use]
pub fn bind_debounced_input(
    window: Duration,
    on_settled: impl Fn(&str) + Send + Sync + 'static,
) -> DebouncedInput {
    DebouncedInput::bind(window, on_settled)
}
