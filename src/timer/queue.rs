//! Virtual-clock timer queue.
//!
//! Time only moves when the host says so, which makes every turn sequence
//! reproducible in tests. A real-time host maps wall-clock elapsed time
//! onto `pop_due`/`advance_to`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{FiredTimer, Scheduler, TimerHandle, TimerKind};

/// A scheduled, not-yet-fired timer.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct Pending {
    handle: TimerHandle,
    kind: TimerKind,
    due: Duration,
}

/// Timer queue driven by an explicit clock.
///
/// ## Behavior
///
/// - `schedule_after()`: due time is `now() + delay`
/// - `pop_due()`: fires the earliest timer due by the deadline and moves
///   the clock to its due time, so timers scheduled while handling it are
///   measured from the right instant
/// - `advance_to()`: moves the clock forward without firing
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimerQueue {
    now: Duration,
    next_handle: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check whether a handle is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Fire the earliest timer due at or before `deadline`.
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<FiredTimer> {
        let (index, next) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.handle))?;

        let fired = FiredTimer { handle: next.handle, kind: next.kind };
        self.now = self.now.max(next.due);
        self.pending.remove(index);
        Some(fired)
    }

    /// Move the clock to `deadline` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

impl Scheduler for TimerQueue {
    fn schedule_after(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(Pending { handle, kind, due: self.now + delay });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }
}
