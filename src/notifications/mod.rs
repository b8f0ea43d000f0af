// SPDX-License-Identifier: MPL-2.0
//! Ephemeral notification ("toast") lifecycle engine.
//!
//! This module owns the non-visual half of a toast system: minting
//! notification records, running their `Pending → Visible → Dismissing →
//! Removed` lifecycle, and scheduling per-item auto-dismiss timers. It
//! renders nothing; a presentation layer subscribes to the visible set and
//! draws it however it likes.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`queue`] - `NotificationQueue` owning the live set and its timers
//! - [`dispatcher`] - `Dispatcher` façade consumers call `show`/`hide` on
//!
//! # Usage
//!
//! ```no_run
//! use feedback_engine::config::Config;
//! use feedback_engine::notifications::{Dispatcher, ShowOptions};
//!
//! // Created once at the composition root, cloned to call sites.
//! let dispatcher = Dispatcher::new(&Config::default());
//!
//! let id = dispatcher.show("Image saved", ShowOptions::new());
//!
//! // The presentation layer claims the (single) visible-set subscription.
//! let toasts = dispatcher.subscribe().expect("first subscriber");
//!
//! // Later, from any clone:
//! dispatcher.hide(id);
//! ```
//!
//! # Design Considerations
//!
//! - Auto-hide defaults to 6 seconds; explicit zero or `persistent()`
//!   disables it
//! - Dismissals reported as clickaway are deliberately ignored
//! - No cap on concurrent notifications and no deduplication unless the
//!   host configures `max_visible`

pub mod dispatcher;
pub mod notification;
pub mod queue;

pub use dispatcher::{Dispatcher, ShowOptions};
pub use notification::{
    AutoHide, DismissReason, Notification, NotificationId, Severity, Status,
};
pub use queue::NotificationQueue;
