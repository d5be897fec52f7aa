// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Logging operators composed from `timestamp`, `tap` and `map`.

use crate::line_sink::{LineSink, StdoutSink};
use crate::timestamp::TimestampExt;
use crate::InstantTimestamped;
use core::fmt::Display;
use core::time::Duration;
use reflux_core::{HasTimestamp, Observable};
use reflux_runtime::Scheduler;
use reflux_stream::{MapExt, TapExt};

/// Extension trait providing timestamped side effects.
///
/// Values pass through unchanged: the timestamp wrapper only exists for the
/// duration of the action.
pub trait TimestampLoggingExt: Observable + Sized {
    /// Calls `action` with every value stamped by `scheduler`, then forwards
    /// the bare value.
    fn with_timestamp_action<Sch, F>(
        self,
        scheduler: Sch,
        action: F,
    ) -> impl Observable<Item = Self::Item>
    where
        Sch: Scheduler,
        F: Fn(&InstantTimestamped<Self::Item, Sch::Instant>) + Send + Sync + 'static,
    {
        self.timestamp(scheduler)
            .tap(action)
            .map(InstantTimestamped::into_inner)
    }

    /// Prints `"{label}: {second}:{millisecond} - {value}"` to stdout for every
    /// value. See [`format_timestamped_line`].
    fn log_timestamp<Sch>(self, label: impl Into<String>, scheduler: Sch) -> impl Observable<Item = Self::Item>
    where
        Sch: Scheduler,
        Self::Item: Display,
    {
        self.log_timestamp_to(label, scheduler, StdoutSink)
    }

    /// Like [`log_timestamp`](Self::log_timestamp), writing to `sink`.
    ///
    /// ```rust
    /// use reflux_core::SubscribeExt;
    /// use reflux_runtime::VirtualScheduler;
    /// use reflux_stream::just;
    /// use reflux_stream_time::TimestampLoggingExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let lines = Arc::new(Mutex::new(Vec::new()));
    /// let sink = lines.clone();
    ///
    /// just("abc")
    ///     .log_timestamp_to("Before throttle", VirtualScheduler::new(), move |line: &str| {
    ///         sink.lock().unwrap().push(line.to_string())
    ///     })
    ///     .subscribe_next(|_| {});
    ///
    /// assert_eq!(*lines.lock().unwrap(), vec!["Before throttle: 0:0 - abc"]);
    /// ```
    fn log_timestamp_to<Sch, W>(
        self,
        label: impl Into<String>,
        scheduler: Sch,
        sink: W,
    ) -> impl Observable<Item = Self::Item>
    where
        Sch: Scheduler,
        Self::Item: Display,
        W: LineSink,
    {
        let label = label.into();
        let origin = scheduler.origin();
        self.with_timestamp_action(scheduler, move |item| {
            let elapsed = item.timestamp() - origin;
            sink.write_line(&format_timestamped_line(&label, elapsed, item.value()));
        })
    }
}

impl<O: Observable> TimestampLoggingExt for O {}

/// Renders one log line: `"{label}: {second}:{millisecond} - {value}"`.
///
/// `second` is the whole seconds of `elapsed` modulo 60 and `millisecond` the
/// sub-second milliseconds, neither zero-padded.
///
/// ```rust
/// use reflux_stream_time::format_timestamped_line;
/// use std::time::Duration;
///
/// let line = format_timestamped_line("After throttle", Duration::from_millis(61_042), &"rx");
/// assert_eq!(line, "After throttle: 1:42 - rx");
/// ```
pub fn format_timestamped_line(label: &str, elapsed: Duration, value: &impl Display) -> String {
    format!(
        "{label}: {}:{} - {value}",
        elapsed.as_secs() % 60,
        elapsed.subsec_millis()
    )
}
