// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{Scheduler, Task};
use core::time::Duration;
use reflux_core::Subscription;
use tokio::runtime::Handle;
use tokio::time::Instant;

/// A [`Scheduler`] that runs each timer as a task on a tokio runtime.
///
/// Instants come from `tokio::time`, so paused test clocks
/// (`tokio::time::pause` / `advance`) apply.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
    origin: Instant,
}

impl TokioScheduler {
    /// Creates a scheduler bound to the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_handle(Handle::current())
    }

    /// Creates a scheduler bound to the current tokio runtime, if there is one.
    #[must_use]
    pub fn try_new() -> Option<Self> {
        Handle::try_current().ok().map(Self::with_handle)
    }

    /// Creates a scheduler spawning its timers through `handle`.
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            origin: Instant::now(),
        }
    }
}

impl Scheduler for TokioScheduler {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn origin(&self) -> Self::Instant {
        self.origin
    }

    fn schedule_after(&self, delay: Duration, task: Task) -> Subscription {
        let cancel = Subscription::new();
        let token = cancel.clone();
        let deadline = Instant::now() + delay;

        let join = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Abort is best effort once the sleep has resolved
            if !token.is_disposed() {
                task();
            }
        });

        let abort = join.abort_handle();
        cancel.add(move || {
            reflux_core::trace!("cancelling tokio timer");
            abort.abort();
        });
        cancel
    }
}
