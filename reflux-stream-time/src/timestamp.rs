// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::InstantTimestamped;
use reflux_core::Observable;
use reflux_runtime::Scheduler;
use reflux_stream::MapExt;

/// Extension trait providing the [`timestamp`](Self::timestamp) operator.
pub trait TimestampExt: Observable + Sized {
    /// Wraps each value with `scheduler.now()` at the moment it passes this
    /// operator.
    ///
    /// Placing `timestamp` before or after a delaying operator therefore
    /// records the instant before or after the delay.
    ///
    /// ```rust
    /// use reflux_core::{HasTimestamp, SubscribeExt};
    /// use reflux_runtime::{VirtualInstant, VirtualScheduler};
    /// use reflux_stream::just;
    /// use reflux_stream_time::TimestampExt;
    ///
    /// let scheduler = VirtualScheduler::new();
    /// scheduler.advance_to(VirtualInstant::from_millis(1500));
    ///
    /// just("tick")
    ///     .timestamp(scheduler.clone())
    ///     .subscribe_next(|item| {
    ///         assert_eq!(*item.value(), "tick");
    ///         assert_eq!(item.timestamp(), VirtualInstant::from_millis(1500));
    ///     });
    /// ```
    fn timestamp<Sch>(
        self,
        scheduler: Sch,
    ) -> impl Observable<Item = InstantTimestamped<Self::Item, Sch::Instant>>
    where
        Sch: Scheduler,
    {
        self.map(move |value| InstantTimestamped::new(value, scheduler.now()))
    }
}

impl<O: Observable> TimestampExt for O {}
