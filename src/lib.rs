// SPDX-License-Identifier: MPL-2.0
//! `feedback_engine` is the ephemeral-value synchronization and
//! notification-queue engine shared by our UI kit.
//!
//! It owns the two pieces of the kit with real state and timing concerns:
//! a debounced-input synchronizer ([`input`]) and a transient-notification
//! ("toast") lifecycle manager ([`notifications`]). Rendering, styling, and
//! everything else visual stays in the presentation layer, which talks to
//! this crate through plain method calls and a visible-set subscription.

#![doc(html_root_url = "https://docs.rs/feedback-engine/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod notifications;

pub use error::{Error, Result};
