// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The producer side of the observable contract.

use crate::{CallbackObserver, Observer, RefluxError, Subscriber, Subscription};
use std::sync::Arc;

/// A cold, push-based sequence of values.
///
/// An `Observable` is an immutable description of how to produce values. Each
/// call to [`subscribe_with`](Self::subscribe_with) starts an independent
/// production run that pushes into the given [`Subscriber`] until it completes,
/// fails, or its subscription is disposed. Two subscriptions never share
/// mutable state.
///
/// Producers must not let failures escape `subscribe_with`; they report them
/// through [`Subscriber::error`] instead. Resources that outlive the call
/// (timers, event handlers, upstream subscriptions) are registered on
/// [`Subscriber::subscription`].
///
/// Consumers normally go through [`SubscribeExt`] rather than calling
/// `subscribe_with` directly.
pub trait Observable: Send + Sync + 'static {
    /// The type of values pushed to observers.
    type Item: Send + 'static;

    /// Starts a production run pushing into `subscriber`.
    fn subscribe_with(&self, subscriber: Subscriber<Self::Item>);
}

/// A type-erased, shareable observable.
pub type BoxObservable<T> = Arc<dyn Observable<Item = T>>;

impl<O> Observable for Arc<O>
where
    O: Observable + ?Sized,
{
    type Item = O::Item;

    fn subscribe_with(&self, subscriber: Subscriber<Self::Item>) {
        (**self).subscribe_with(subscriber);
    }
}

/// Subscription helpers available on every [`Observable`].
///
/// # Examples
///
/// ```
/// use reflux_core::{create, SubscribeExt};
/// use std::sync::{Arc, Mutex};
///
/// let source = create(|subscriber| {
///     subscriber.next(1);
///     subscriber.next(2);
///     subscriber.complete();
/// });
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let subscription = source.subscribe_next(move |x| sink.lock().unwrap().push(x));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// assert!(subscription.is_disposed());
/// ```
pub trait SubscribeExt: Observable + Sized {
    /// Subscribes `observer` and returns the handle that cancels the run.
    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Self::Item>,
    {
        let subscription = Subscription::new();
        self.subscribe_with(Subscriber::new(observer, subscription.clone()));
        subscription
    }

    /// Subscribes with a value callback only.
    fn subscribe_next<F>(&self, on_next: F) -> Subscription
    where
        F: FnMut(Self::Item) + Send + 'static,
    {
        self.subscribe(CallbackObserver::new().with_next(on_next))
    }

    /// Subscribes with value, error and completion callbacks.
    fn subscribe_callbacks<N, E, C>(&self, on_next: N, on_error: E, on_completed: C) -> Subscription
    where
        N: FnMut(Self::Item) + Send + 'static,
        E: FnMut(RefluxError) + Send + 'static,
        C: FnMut() + Send + 'static,
    {
        self.subscribe(
            CallbackObserver::new()
                .with_next(on_next)
                .with_error(on_error)
                .with_completed(on_completed),
        )
    }
}

impl<O: Observable> SubscribeExt for O {}
