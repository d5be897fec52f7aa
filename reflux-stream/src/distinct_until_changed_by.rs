// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{Observable, Observer, RefluxError, Subscriber};
use std::sync::Arc;

/// Extension trait providing the
/// [`distinct_until_changed_by`](Self::distinct_until_changed_by) operator.
pub trait DistinctUntilChangedByExt: Observable + Sized
where
    Self::Item: Clone,
{
    /// Suppresses values that `equals` considers equal to the last forwarded
    /// value.
    ///
    /// # Behavior
    ///
    /// - The first value is always forwarded
    /// - Each later value is compared with the last *forwarded* value, not the
    ///   last arriving one
    /// - Errors and completion pass through unchanged
    /// - Every subscription starts with an empty history
    ///
    /// ```rust
    /// use reflux_core::SubscribeExt;
    /// use reflux_stream::prelude::*;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    ///
    /// range(1, 9)?
    ///     .map(|x| x / 3)
    ///     .distinct_until_changed_by(|last, current| last == current)
    ///     .subscribe_next(move |x| sink.lock().unwrap().push(x));
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3]);
    /// # Ok::<(), reflux_core::RefluxError>(())
    /// ```
    fn distinct_until_changed_by<F>(self, equals: F) -> impl Observable<Item = Self::Item>
    where
        F: Fn(&Self::Item, &Self::Item) -> bool + Send + Sync + 'static,
    {
        DistinctUntilChangedBy {
            source: self,
            equals: Arc::new(equals),
        }
    }
}

impl<O> DistinctUntilChangedByExt for O
where
    O: Observable,
    O::Item: Clone,
{
}

struct DistinctUntilChangedBy<S, F> {
    source: S,
    equals: Arc<F>,
}

impl<S, F> Observable for DistinctUntilChangedBy<S, F>
where
    S: Observable,
    S::Item: Clone,
    F: Fn(&S::Item, &S::Item) -> bool + Send + Sync + 'static,
{
    type Item = S::Item;

    fn subscribe_with(&self, subscriber: Subscriber<S::Item>) {
        let upstream = subscriber.subscription().child();
        self.source.subscribe_with(Subscriber::new(
            DistinctObserver {
                downstream: subscriber,
                equals: Arc::clone(&self.equals),
                last: None,
            },
            upstream,
        ));
    }
}

struct DistinctObserver<T, F> {
    downstream: Subscriber<T>,
    equals: Arc<F>,
    last: Option<T>,
}

impl<T, F> Observer<T> for DistinctObserver<T, F>
where
    T: Clone + Send + 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    fn on_next(&mut self, value: T) {
        if let Some(last) = &self.last {
            if (self.equals)(last, &value) {
                return;
            }
        }
        self.last = Some(value.clone());
        self.downstream.next(value);
    }

    fn on_error(&mut self, error: RefluxError) {
        self.downstream.error(error);
    }

    fn on_completed(&mut self) {
        self.downstream.complete();
    }
}
