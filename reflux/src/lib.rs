// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Reflux
//!
//! Push-based observable streams in the Rx tradition.
//!
//! ## Overview
//!
//! An [`Observable`] describes how to produce values; subscribing starts an
//! independent run that pushes `next` notifications into an [`Observer`],
//! followed by at most one `error` or `completion`. The returned
//! [`Subscription`] cancels the run, detaching event handlers and cancelling
//! timers.
//!
//! The workspace is split by concern:
//!
//! - `reflux-core`: observer, observable, subscription and error contracts
//! - `reflux-runtime`: the injected [`Scheduler`] with tokio and virtual clocks
//! - `reflux-stream`: factories, stateless operators and the event bridge
//! - `reflux-stream-time`: throttle, timestamp, timed generation and logging
//! - `reflux-exec`: consuming observables from async code
//!
//! ## Quick Start
//!
//! ```rust
//! use reflux::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let squares = Arc::new(Mutex::new(Vec::new()));
//! let sink = squares.clone();
//!
//! generate(0i32, |i| *i < 5, |i| i + 1, |i| i * i)
//!     .filter(|x| x % 2 == 0)
//!     .subscribe_next(move |x| sink.lock().unwrap().push(x));
//!
//! assert_eq!(*squares.lock().unwrap(), vec![0, 4, 16]);
//! ```
//!
//! ## Time
//!
//! Time-based operators take a [`Scheduler`] by value. Use a
//! `TokioScheduler` inside a tokio runtime and a [`VirtualScheduler`] in
//! tests:
//!
//! ```rust
//! use reflux::prelude::*;
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let sink = lines.clone();
//!
//! let _subscription = just("rx")
//!     .throttle(Duration::from_millis(500), scheduler.clone())
//!     .log_timestamp_to("After throttle", scheduler.clone(), move |line: &str| {
//!         sink.lock().unwrap().push(line.to_string())
//!     })
//!     .subscribe_next(|_| {});
//!
//! assert_eq!(*lines.lock().unwrap(), vec!["After throttle: 0:0 - rx"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use reflux_core::{
    create, BoxObservable, CallbackObserver, HasTimestamp, Observable, Observer, RefluxError,
    Result, StreamItem, SubscribeExt, Subscriber, Subscription, SubscriptionGuard,
};
#[cfg(feature = "runtime-tokio")]
pub use reflux_runtime::TokioScheduler;
pub use reflux_runtime::{Scheduler, VirtualInstant, VirtualScheduler};

/// Factories, stateless operators and the event bridge.
pub mod stream {
    pub use reflux_stream::*;
}

/// Time-based operators.
pub mod time {
    pub use reflux_stream_time::*;
}

/// Async consumption.
pub mod exec {
    pub use reflux_exec::*;
}

/// Everything needed to build and consume a pipeline.
pub mod prelude {
    pub use reflux_core::{
        create, BoxObservable, HasTimestamp, Observable, RefluxError, StreamItem, SubscribeExt,
        Subscriber, Subscription,
    };
    pub use reflux_exec::IntoStreamExt;
    #[cfg(feature = "runtime-tokio")]
    pub use reflux_runtime::TokioScheduler;
    pub use reflux_runtime::{Scheduler, VirtualScheduler};
    pub use reflux_stream::prelude::*;
    pub use reflux_stream_time::prelude::*;
}
