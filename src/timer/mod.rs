//! Timer facility for delayed turn transitions.
//!
//! The turn machine never sleeps. It asks a `Scheduler` to fire a
//! `TimerKind` after a delay and keeps the returned `TimerHandle`. When the
//! host sees the timer fire it hands the handle back to the session, and
//! the machine compares it against the handle it is waiting for. A handle
//! it is no longer waiting for (cancelled, or from before a restart) is
//! ignored.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::timer::{Scheduler, TimerKind, TimerQueue};
//!
//! let mut timers = TimerQueue::new();
//! let evaluate = timers.schedule_after(Duration::from_millis(300), TimerKind::Evaluate);
//!
//! assert!(timers.pop_due(Duration::from_millis(299)).is_none());
//! let fired = timers.pop_due(Duration::from_millis(300)).unwrap();
//! assert_eq!(fired.handle, evaluate);
//! ```

mod queue;

pub use queue::TimerQueue;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one scheduled timer. Never reused by a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Compare the two open cards.
    Evaluate,
    /// Turn a mismatched pair face-down.
    Revert,
}

/// A timer that has come due.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub kind: TimerKind,
}

/// Cancellable one-shot timers.
///
/// Implementations decide how time passes; the engine only schedules and
/// cancels. A timer fires at most once and never after it is cancelled.
pub trait Scheduler {
    /// Schedule `kind` to fire after `delay`.
    fn schedule_after(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle;

    /// Cancel a pending timer.
    ///
    /// Returns false if it already fired or was already cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}
