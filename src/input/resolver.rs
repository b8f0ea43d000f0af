// SPDX-License-Identifier: MPL-2.0
//! Controlled/uncontrolled value routing.
//!
//! A bound input either mirrors an externally owned value (controlled) or
//! owns its value internally (uncontrolled). The choice is a tagged variant
//! fixed at construction, so switching modes mid-lifetime is
//! unrepresentable; a component that needs to switch tears the resolver
//! down and builds a new one.

use std::sync::Arc;

use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningKind};

/// Callback invoked with every edited value.
pub type ChangeCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug)]
enum ValueSource {
    /// The caller owns the authoritative value; the resolver retains
    /// nothing.
    Controlled,
    /// The resolver owns the authoritative value.
    Uncontrolled { value: String },
}

/// Routes user edits to the authoritative value owner.
pub struct ValueResolver {
    source: ValueSource,
    on_change: ChangeCallback,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ValueResolver {
    /// Creates a resolver for an externally owned value.
    ///
    /// Every edit is forwarded to `on_change` unconditionally; the caller
    /// decides whether and how to re-render with the new value.
    #[must_use]
    pub fn controlled(on_change: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            source: ValueSource::Controlled,
            on_change: Arc::new(on_change),
            diagnostics: None,
        }
    }

    /// Creates a resolver that owns its value, starting from `initial`.
    ///
    /// Edits mutate the internal value and are also forwarded to
    /// `on_change` for observers.
    #[must_use]
    pub fn uncontrolled(
        initial: impl Into<String>,
        on_change: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: ValueSource::Uncontrolled {
                value: initial.into(),
            },
            on_change: Arc::new(on_change),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle used for misuse warnings.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns whether the authoritative value is externally owned.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, ValueSource::Controlled)
    }

    /// Returns the internally owned value, or `None` when controlled.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.source {
            ValueSource::Controlled => None,
            ValueSource::Uncontrolled { value } => Some(value),
        }
    }

    /// Routes a user edit.
    ///
    /// Uncontrolled resolvers mutate their owned value first; both modes
    /// then forward the edit to `on_change`.
    pub fn handle_edit(&mut self, new_value: &str) {
        if let ValueSource::Uncontrolled { value } = &mut self.source {
            *value = new_value.to_string();
        }
        (self.on_change)(new_value);
    }

    /// Accepts an externally supplied value.
    ///
    /// Meaningful only for controlled resolvers, where the caller already
    /// owns the value and nothing needs to be retained. Pushing an external
    /// value into an uncontrolled resolver means two owners disagree about
    /// the authoritative value; the push is ignored and a warning is
    /// recorded.
    pub fn sync_external(&mut self, _value: &str) {
        if let ValueSource::Uncontrolled { .. } = self.source {
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.log_warning(WarningEvent::new(
                    WarningKind::MixedValueSource,
                    "external value pushed into an uncontrolled resolver; \
                     rebuild the resolver instead of switching modes",
                ));
            }
        }
    }
}

impl std::fmt::Debug for ValueResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueResolver")
            .field("source", &self.source)
            .finish()
    }
}
