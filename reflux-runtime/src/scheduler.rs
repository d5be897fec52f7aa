// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;
use reflux_core::Subscription;

/// A one-shot unit of work run by a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// The time source and timer queue used by time-based operators.
///
/// Implementations run tasks in due-time order. A task never runs inside the
/// `schedule_after` call that registered it, even for a zero delay.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// The clock's point-in-time type.
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// The instant this scheduler was created, used as the zero point when
    /// timestamps are rendered as elapsed time.
    fn origin(&self) -> Self::Instant;

    /// Runs `task` once `delay` has elapsed.
    ///
    /// Disposing the returned subscription cancels the task if it has not
    /// started yet.
    fn schedule_after(&self, delay: Duration, task: Task) -> Subscription;
}
