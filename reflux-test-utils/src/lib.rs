// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the reflux observable engine.
//!
//! This crate is for development and testing only.
//!
//! # Key Types
//!
//! - [`TestObserver`] records every notification it receives as a
//!   [`Notification`], so assertions can compare whole sequences.
//! - [`TestSubject`] is a hot source that tests push into by hand.
//! - [`EventSource`] is an attach/detach handler registry with counters,
//!   standing in for UI-style event APIs.
//! - [`FakeForm`] and [`FakeTextBox`] raise mouse-move and text-changed events
//!   the way a desktop form would.
//! - [`RecordingSink`] captures printed lines.
//!
//! ```rust
//! use reflux_core::{create, SubscribeExt};
//! use reflux_test_utils::{Notification, TestObserver};
//!
//! let observer = TestObserver::new();
//! create(|subscriber| {
//!     subscriber.next(1);
//!     subscriber.complete();
//! })
//! .subscribe(observer.clone());
//!
//! assert_eq!(
//!     observer.notifications(),
//!     vec![Notification::Next(1), Notification::Completed]
//! );
//! ```

pub mod error_injection;
pub mod event_source;
pub mod fixtures;
pub mod recording_sink;
pub mod test_observer;
pub mod test_subject;
pub mod widgets;

pub use error_injection::{injected_error, TestError};
pub use event_source::{EventSource, Handler, PatternHandler};
pub use fixtures::{MouseEventArgs, Point};
pub use recording_sink::RecordingSink;
pub use test_observer::{Notification, TestObserver};
pub use test_subject::TestSubject;
pub use widgets::{FakeForm, FakeTextBox, MouseMoveEvent, TextChangedEvent};
