// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Factories and operators for reflux observables.
//!
//! # Factories
//!
//! | Function | Emits |
//! |---|---|
//! | [`empty`] | completion only |
//! | [`throw`] | the given error only |
//! | [`just`] | one value, then completion |
//! | [`range`] | `count` consecutive integers, then completion |
//! | [`generate`] / [`try_generate`] | a state-machine loop, synchronously |
//! | [`never`] | nothing, ever |
//! | [`from_event`] / [`from_event_pattern`] | one value per external callback |
//!
//! # Operators
//!
//! Each operator is an extension trait over [`Observable`](reflux_core::Observable),
//! re-exported from [`prelude`]:
//!
//! - [`MapExt`]: `map`, `try_map`
//! - [`FilterExt`]: `filter`, `try_filter`
//! - [`TapExt`]: `tap`, `try_tap`, `tap_with`
//! - [`DistinctUntilChangedExt`] and [`DistinctUntilChangedByExt`]
//! - [`ObservableExt`]: `boxed`
//!
//! Operators never block and never spawn: a value pushed into the head of a
//! chain reaches the subscriber on the same call stack. Time-based operators
//! live in `reflux-stream-time`.
//!
//! ```rust
//! use reflux_core::SubscribeExt;
//! use reflux_stream::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! generate(0, |i| *i < 5, |i| i + 1, |i| i * i)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| format!("#{x}"))
//!     .subscribe_next(move |s| sink.lock().unwrap().push(s));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["#0", "#4", "#16"]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod distinct_until_changed;
mod distinct_until_changed_by;
mod empty;
mod filter;
mod from_event;
mod generate;
mod just;
mod map;
mod never;
mod observable_ext;
mod range;
mod tap;
mod throw;

pub mod prelude;

pub use distinct_until_changed::DistinctUntilChangedExt;
pub use distinct_until_changed_by::DistinctUntilChangedByExt;
pub use empty::{empty, Empty};
pub use filter::FilterExt;
pub use from_event::{from_event, from_event_pattern, EventHandler, EventPattern, PatternHandler};
pub use generate::{generate, try_generate, Generate};
pub use just::{just, Just};
pub use map::MapExt;
pub use never::{never, Never};
pub use observable_ext::ObservableExt;
pub use range::{range, Range};
pub use tap::{TapActions, TapExt};
pub use throw::{throw, Throw};
