// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value projection (Rx `Select`).

use reflux_core::{Observable, Observer, RefluxError, Result, Subscriber};
use std::sync::Arc;

/// Extension trait providing the [`map`](Self::map) operator.
pub trait MapExt: Observable + Sized {
    /// Pushes `selector(value)` for every upstream value.
    ///
    /// Errors and completion pass through unchanged.
    ///
    /// ```rust
    /// use reflux_core::SubscribeExt;
    /// use reflux_stream::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// range(1, 3)?
    ///     .map(|x| x * 10)
    ///     .subscribe_next(move |x| sink.lock().unwrap().push(x));
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![10, 20, 30]);
    /// # Ok::<(), reflux_core::RefluxError>(())
    /// ```
    fn map<U, F>(self, selector: F) -> impl Observable<Item = U>
    where
        U: Send + 'static,
        F: Fn(Self::Item) -> U + Send + Sync + 'static,
    {
        self.try_map(move |value| Ok(selector(value)))
    }

    /// Like [`map`](Self::map), with a fallible selector.
    ///
    /// The first `Err` is pushed as the terminal error and the upstream
    /// subscription is released.
    fn try_map<U, F>(self, selector: F) -> impl Observable<Item = U>
    where
        U: Send + 'static,
        F: Fn(Self::Item) -> Result<U> + Send + Sync + 'static,
    {
        Map {
            source: self,
            selector: Arc::new(selector),
        }
    }
}

impl<O: Observable> MapExt for O {}

struct Map<S, F> {
    source: S,
    selector: Arc<F>,
}

impl<S, U, F> Observable for Map<S, F>
where
    S: Observable,
    U: Send + 'static,
    F: Fn(S::Item) -> Result<U> + Send + Sync + 'static,
{
    type Item = U;

    fn subscribe_with(&self, subscriber: Subscriber<U>) {
        let upstream = subscriber.subscription().child();
        self.source.subscribe_with(Subscriber::new(
            MapObserver {
                downstream: subscriber,
                selector: Arc::clone(&self.selector),
            },
            upstream,
        ));
    }
}

struct MapObserver<U, F> {
    downstream: Subscriber<U>,
    selector: Arc<F>,
}

impl<T, U, F> Observer<T> for MapObserver<U, F>
where
    U: Send + 'static,
    F: Fn(T) -> Result<U> + Send + Sync + 'static,
{
    fn on_next(&mut self, value: T) {
        match (self.selector)(value) {
            Ok(mapped) => self.downstream.next(mapped),
            Err(error) => self.downstream.error(error),
        }
    }

    fn on_error(&mut self, error: RefluxError) {
        self.downstream.error(error);
    }

    fn on_completed(&mut self) {
        self.downstream.complete();
    }
}
