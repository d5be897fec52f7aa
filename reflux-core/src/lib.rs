// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core contracts of the reflux observable engine.
//!
//! - [`Observer`] consumes `on_next` / `on_error` / `on_completed`
//! - [`Observable`] describes how to produce values for one subscription
//! - [`Subscriber`] enforces the notification grammar for producers
//! - [`Subscription`] releases everything a production run holds
//!
//! Factories and operators live in `reflux-stream` and `reflux-stream-time`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
pub mod logging;

pub mod create;
pub mod error;
pub mod has_timestamp;
pub mod observable;
pub mod observer;
pub mod stream_item;
pub mod subscriber;
pub mod subscription;

pub use self::create::{create, Create};
pub use self::error::{IntoRefluxError, RefluxError, Result, ResultExt};
pub use self::has_timestamp::HasTimestamp;
pub use self::observable::{BoxObservable, Observable, SubscribeExt};
pub use self::observer::{CallbackObserver, Observer};
pub use self::stream_item::StreamItem;
pub use self::subscriber::Subscriber;
pub use self::subscription::{Subscription, SubscriptionGuard};
