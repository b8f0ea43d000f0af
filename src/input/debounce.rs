// SPDX-License-Identifier: MPL-2.0
//! Debounced input binding.
//!
//! Collapses a rapid sequence of value updates into a single emission once
//! the input has been quiet for the configured window. At most one timer is
//! pending at any time; every update aborts and replaces it. A generation
//! counter closes the race where an aborted timer has already woken but not
//! yet observed the newer update.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::task::AbortHandle;

/// Callback invoked with the settled value.
pub type SettledCallback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug)]
struct DebounceState {
    window: Duration,
    last_raw_value: Option<String>,
    last_emitted_value: Option<String>,
    pending: Option<AbortHandle>,
    generation: u64,
    torn_down: bool,
}

struct Shared {
    state: Mutex<DebounceState>,
    on_settled: SettledCallback,
}

/// A debounced input binding.
///
/// Created with [`bind`], fed with [`update`], and released with
/// [`teardown`] (or by dropping the last handle). Handles are cheap to
/// clone and all clones drive the same binding; separate bindings never
/// interfere with each other's timers or emissions.
///
/// A zero window emits synchronously inside `update`; any other window
/// schedules the emission on the ambient tokio runtime, so non-zero
/// bindings must be driven from within one.
///
/// [`bind`]: DebouncedInput::bind
/// [`update`]: DebouncedInput::update
/// [`teardown`]: DebouncedInput::teardown
#[derive(Clone)]
pub struct DebouncedInput {
    shared: Arc<Shared>,
}

impl DebouncedInput {
    /// Binds an input with the given quiescence window and consumer
    /// callback.
    #[must_use]
    pub fn bind(window: Duration, on_settled: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(DebounceState {
                    window,
                    last_raw_value: None,
                    last_emitted_value: None,
                    pending: None,
                    generation: 0,
                    torn_down: false,
                }),
                on_settled: Arc::new(on_settled),
            }),
        }
    }

    /// Records a new raw value and restarts the quiescence window.
    ///
    /// With a zero window the value is emitted before `update` returns.
    /// After [`teardown`](Self::teardown) this is a no-op.
    pub fn update(&self, value: impl Into<String>) {
        let value = value.into();
        let emit_now = {
            let mut state = lock(&self.shared.state);
            if state.torn_down {
                return;
            }
            state.generation = state.generation.wrapping_add(1);
            let generation = state.generation;
            if let Some(pending) = state.pending.take() {
                pending.abort();
            }
            state.last_raw_value = Some(value.clone());

            if state.window.is_zero() {
                state.last_emitted_value = Some(value.clone());
                true
            } else {
                let weak = Arc::downgrade(&self.shared);
                let window = state.window;
                let task = tokio::spawn(async move {
                    tokio::time::sleep(window).await;
                    emit_if_current(&weak, generation);
                });
                state.pending = Some(task.abort_handle());
                false
            }
        };
        // Emission happens outside the lock so the consumer may call back
        // into the binding.
        if emit_now {
            (self.shared.on_settled)(&value);
        }
    }

    /// Emits the last raw value immediately and aborts the pending timer.
    ///
    /// Used for actions (e.g. clearing a field) that must not wait out the
    /// window. A no-op if no value was ever recorded or after teardown.
    pub fn flush(&self) {
        let value = {
            let mut state = lock(&self.shared.state);
            if state.torn_down {
                return;
            }
            if let Some(pending) = state.pending.take() {
                pending.abort();
            }
            // Invalidate any timer that already woke.
            state.generation = state.generation.wrapping_add(1);
            let Some(value) = state.last_raw_value.clone() else {
                return;
            };
            state.last_emitted_value = Some(value.clone());
            value
        };
        (self.shared.on_settled)(&value);
    }

    /// Tears the binding down, aborting any pending timer.
    ///
    /// No emission happens after teardown, even one already scheduled.
    /// Subsequent `update` and `flush` calls are no-ops.
    pub fn teardown(&self) {
        let mut state = lock(&self.shared.state);
        state.torn_down = true;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }

    /// Returns the configured quiescence window.
    #[must_use]
    pub fn window(&self) -> Duration {
        lock(&self.shared.state).window
    }

    /// Returns the last value delivered to the consumer.
    #[must_use]
    pub fn last_emitted(&self) -> Option<String> {
        lock(&self.shared.state).last_emitted_value.clone()
    }

    /// Returns whether an emission is currently scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        lock(&self.shared.state).pending.is_some()
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        // Last handle gone; no emission may happen after this point.
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }
}

impl std::fmt::Debug for DebouncedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.shared.state);
        f.debug_struct("DebouncedInput")
            .field("window", &state.window)
            .field("has_pending", &state.pending.is_some())
            .field("torn_down", &state.torn_down)
            .finish()
    }
}

fn lock(state: &Mutex<DebounceState>) -> MutexGuard<'_, DebounceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Timer-side emission path. Emits only if no newer update superseded the
/// timer and the binding is still alive.
fn emit_if_current(shared: &Weak<Shared>, generation: u64) {
    let Some(shared) = shared.upgrade() else { return };
    let value = {
        let mut state = lock(&shared.state);
        if state.torn_down || state.generation != generation {
            return;
        }
        state.pending = None;
        let Some(value) = state.last_raw_value.clone() else {
            return;
        };
        state.last_emitted_value = Some(value.clone());
        value
    };
    (shared.on_settled)(&value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use tokio::time::sleep;

    fn recording_binding(window_ms: u64) -> (DebouncedInput, Arc<StdMutex<Vec<String>>>) {
        let emissions = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&emissions);
        let input = DebouncedInput::bind(Duration::from_millis(window_ms), move |value| {
            sink.lock().unwrap().push(value.to_string());
        });
        (input, emissions)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_single_emission_of_last_value() {
        let (input, emissions) = recording_binding(300);

        input.update("a");
        sleep(Duration::from_millis(50)).await;
        input.update("ab");
        sleep(Duration::from_millis(50)).await;
        input.update("abc");

        // 250ms after the last update: still inside the window.
        sleep(Duration::from_millis(250)).await;
        assert!(emissions.lock().unwrap().is_empty());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(*emissions.lock().unwrap(), vec!["abc".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bindings_do_not_interfere() {
        let (first, first_emissions) = recording_binding(100);
        let (second, second_emissions) = recording_binding(100);

        first.update("only first");
        sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *first_emissions.lock().unwrap(),
            vec!["only first".to_string()]
        );
        assert!(second_emissions.lock().unwrap().is_empty());
        assert!(second.last_emitted().is_none());
    }

    #[test]
    fn zero_window_emits_synchronously() {
        let (input, emissions) = recording_binding(0);

        input.update("x");

        // Emitted before update returned; no runtime involved.
        assert_eq!(*emissions.lock().unwrap(), vec!["x".to_string()]);
        assert_eq!(input.last_emitted().as_deref(), Some("x"));
        assert!(!input.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_cancels_pending_emission() {
        let (input, emissions) = recording_binding(300);

        input.update("doomed");
        assert!(input.has_pending());
        input.teardown();

        sleep(Duration::from_millis(400)).await;
        assert!(emissions.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn update_and_flush_after_teardown_are_noops() {
        let (input, emissions) = recording_binding(100);

        input.update("before");
        input.teardown();
        input.update("after");
        input.flush();

        sleep(Duration::from_millis(200)).await;
        assert!(emissions.lock().unwrap().is_empty());
        assert!(!input.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn flush_emits_immediately_and_cancels_timer() {
        let (input, emissions) = recording_binding(300);

        input.update("now");
        input.flush();
        assert_eq!(*emissions.lock().unwrap(), vec!["now".to_string()]);

        // The cancelled timer must not produce a second emission.
        sleep(Duration::from_millis(400)).await;
        assert_eq!(emissions.lock().unwrap().len(), 1);
    }

    #[test]
    fn flush_without_updates_is_a_noop() {
        let (input, emissions) = recording_binding(300);
        input.flush();
        assert!(emissions.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn update_mid_window_restarts_the_window() {
        let (input, emissions) = recording_binding(300);

        input.update("first");
        sleep(Duration::from_millis(200)).await;
        input.update("second");

        // 150ms later the first deadline has passed but nothing may emit.
        sleep(Duration::from_millis(150)).await;
        assert!(emissions.lock().unwrap().is_empty());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(*emissions.lock().unwrap(), vec!["second".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_binding_cancels_pending_emission() {
        let (input, emissions) = recording_binding(100);

        input.update("gone");
        drop(input);

        sleep(Duration::from_millis(200)).await;
        assert!(emissions.lock().unwrap().is_empty());
    }
}
