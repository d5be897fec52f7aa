// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for reflux observables.
//!
//! Every operator here takes a [`Scheduler`](reflux_runtime::Scheduler) by
//! value. Production code passes a `TokioScheduler`; tests pass a
//! `VirtualScheduler` and move its clock by hand:
//!
//! ```rust
//! use reflux_core::SubscribeExt;
//! use reflux_runtime::VirtualScheduler;
//! use reflux_stream::range;
//! use reflux_stream_time::prelude::*;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! range(1, 5)?
//!     .throttle(Duration::from_secs(1), scheduler.clone())
//!     .subscribe_next(move |x| sink.lock().unwrap().push(x));
//!
//! // Only the last value of a burst survives; completion flushes it.
//! assert_eq!(*seen.lock().unwrap(), vec![5]);
//! # Ok::<(), reflux_core::RefluxError>(())
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod debounce;
mod generate_with_time;
mod instant_timestamped;
mod line_sink;
mod log_timestamp;
mod timestamp;

pub mod prelude;

pub use debounce::DebounceExt;
pub use generate_with_time::{generate_with_time, try_generate_with_time, GenerateWithTime};
pub use instant_timestamped::InstantTimestamped;
pub use line_sink::{LineSink, StdoutSink};
pub use log_timestamp::{format_timestamped_line, TimestampLoggingExt};
pub use timestamp::TimestampExt;

/// A value stamped by a `TokioScheduler`.
#[cfg(feature = "runtime-tokio")]
pub type TokioTimestamped<T> =
    InstantTimestamped<T, <reflux_runtime::TokioScheduler as reflux_runtime::Scheduler>::Instant>;

/// A value stamped by a `VirtualScheduler`.
pub type VirtualTimestamped<T> = InstantTimestamped<T, reflux_runtime::VirtualInstant>;
