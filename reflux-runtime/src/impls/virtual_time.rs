// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A simulated clock for deterministic tests of time-based operators.

use crate::scheduler::{Scheduler, Task};
use core::fmt;
use core::ops::{Add, Sub};
use core::time::Duration;
use parking_lot::Mutex;
use reflux_core::Subscription;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A point on the [`VirtualScheduler`] clock, measured from its start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    /// The instant the virtual clock starts at.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// An instant `millis` milliseconds after the start of the clock.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Time elapsed since the start of the clock.
    #[must_use]
    pub const fn elapsed(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl Sub for VirtualInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for VirtualInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[derive(Default)]
struct State {
    now: VirtualInstant,
    next_id: u64,
    queue: BTreeMap<(VirtualInstant, u64), Task>,
}

/// A [`Scheduler`] driven by hand instead of by wall-clock time.
///
/// Timers only fire inside [`advance_by`](Self::advance_by) /
/// [`advance_to`](Self::advance_to), on the calling thread, in due-time order
/// (ties in scheduling order). Tasks scheduled while advancing run in the same
/// call if they fall due before the target instant.
///
/// # Example
///
/// ```
/// use reflux_runtime::{Scheduler, VirtualScheduler};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = fired.clone();
/// scheduler.schedule_after(
///     Duration::from_millis(100),
///     Box::new(move || flag.store(true, Ordering::SeqCst)),
/// );
///
/// scheduler.advance_by(Duration::from_millis(99));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance_by(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    state: Arc<Mutex<State>>,
}

impl VirtualScheduler {
    /// Creates a scheduler whose clock reads [`VirtualInstant::ZERO`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `duration`, firing every timer due on the way.
    pub fn advance_by(&self, duration: Duration) {
        let target = self.now() + duration;
        self.advance_to(target);
    }

    /// Moves the clock to `target`, firing every timer due on the way.
    ///
    /// Targets in the past leave the clock where it is.
    pub fn advance_to(&self, target: VirtualInstant) {
        loop {
            let task = {
                let mut state = self.state.lock();
                let due = match state.queue.first_key_value() {
                    Some((&key, _)) if key.0 <= target => key,
                    _ => break,
                };
                state.now = state.now.max(due.0);
                state.queue.remove(&due)
            };
            // Run unlocked so the task can schedule or cancel timers
            if let Some(task) = task {
                task();
            }
        }

        let mut state = self.state.lock();
        state.now = state.now.max(target);
    }

    /// Number of timers scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.lock().queue.len()
    }
}

impl Scheduler for VirtualScheduler {
    type Instant = VirtualInstant;

    fn now(&self) -> Self::Instant {
        self.state.lock().now
    }

    fn origin(&self) -> Self::Instant {
        VirtualInstant::ZERO
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> Subscription {
        let key = {
            let mut state = self.state.lock();
            let key = (state.now + delay, state.next_id);
            state.next_id += 1;
            state.queue.insert(key, task);
            key
        };
        reflux_core::trace!("virtual timer scheduled at {}", key.0);

        let state = Arc::downgrade(&self.state);
        Subscription::from_fn(move || {
            if let Some(state) = state.upgrade() {
                let removed = state.lock().queue.remove(&key);
                // Dropped outside the lock
                drop(removed);
            }
        })
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &state.now)
            .field("pending_timers", &state.queue.len())
            .finish()
    }
}
