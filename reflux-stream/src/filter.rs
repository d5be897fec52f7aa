// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate filtering (Rx `Where`).

use reflux_core::{Observable, Observer, RefluxError, Result, Subscriber};
use std::sync::Arc;

/// Extension trait providing the [`filter`](Self::filter) operator.
pub trait FilterExt: Observable + Sized {
    /// Forwards only the values for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> impl Observable<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        self.try_filter(move |value| Ok(predicate(value)))
    }

    /// Like [`filter`](Self::filter), with a fallible predicate.
    ///
    /// A failing predicate terminates the sequence with its error.
    fn try_filter<P>(self, predicate: P) -> impl Observable<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> Result<bool> + Send + Sync + 'static,
    {
        Filter {
            source: self,
            predicate: Arc::new(predicate),
        }
    }
}

impl<O: Observable> FilterExt for O {}

struct Filter<S, P> {
    source: S,
    predicate: Arc<P>,
}

impl<S, P> Observable for Filter<S, P>
where
    S: Observable,
    P: Fn(&S::Item) -> Result<bool> + Send + Sync + 'static,
{
    type Item = S::Item;

    fn subscribe_with(&self, subscriber: Subscriber<S::Item>) {
        let upstream = subscriber.subscription().child();
        self.source.subscribe_with(Subscriber::new(
            FilterObserver {
                downstream: subscriber,
                predicate: Arc::clone(&self.predicate),
            },
            upstream,
        ));
    }
}

struct FilterObserver<T, P> {
    downstream: Subscriber<T>,
    predicate: Arc<P>,
}

impl<T, P> Observer<T> for FilterObserver<T, P>
where
    T: Send + 'static,
    P: Fn(&T) -> Result<bool> + Send + Sync + 'static,
{
    fn on_next(&mut self, value: T) {
        match (self.predicate)(&value) {
            Ok(true) => self.downstream.next(value),
            Ok(false) => {}
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
