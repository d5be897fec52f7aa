// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Observable, Subscriber};
use core::marker::PhantomData;

/// An observable defined by a closure run once per subscription.
///
/// See [`create`].
pub struct Create<T, F> {
    producer: F,
    _item: PhantomData<fn() -> T>,
}

/// Builds an observable from a producer closure.
///
/// The closure receives the [`Subscriber`] of each new subscription. It may
/// push synchronously, hand the subscriber to another thread, and register
/// cleanup on [`Subscriber::subscription`].
///
/// # Examples
///
/// ```
/// use reflux_core::{create, SubscribeExt};
///
/// let answer = create(|subscriber| {
///     subscriber.next(42);
///     subscriber.complete();
/// });
///
/// let subscription = answer.subscribe_next(|x| assert_eq!(x, 42));
/// assert!(subscription.is_disposed());
/// ```
pub fn create<T, F>(producer: F) -> Create<T, F>
where
    T: Send + 'static,
    F: Fn(Subscriber<T>) + Send + Sync + 'static,
{
    Create {
        producer,
        _item: PhantomData,
    }
}

impl<T, F> Observable for Create<T, F>
where
    T: Send + 'static,
    F: Fn(Subscriber<T>) + Send + Sync + 'static,
{
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        (self.producer)(subscriber);
    }
}
