use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use super::state::TurnPhase;

/// Holds the in-flight flag for one turn.
///
/// Dropping it resets the phase to `Idle` and then clears the flag, so the
/// flag is released on every exit path including unwinding and
/// cancellation.
pub(super) struct TurnGuard<'a> {
    busy: &'a AtomicBool,
    phase: &'a watch::Sender<TurnPhase>,
}

impl<'a> TurnGuard<'a> {
    /// Returns `None` if a turn is already in flight.
    pub(super) fn acquire(busy: &'a AtomicBool, phase: &'a watch::Sender<TurnPhase>) -> Option<Self> {
        busy.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { busy, phase })
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.phase.send_replace(TurnPhase::Idle);
        self.busy.store(false, Ordering::Release);
    }
}
