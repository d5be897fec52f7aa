// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous generator loop.

use reflux_core::{Observable, Result, Subscriber};

/// See [`generate`] and [`try_generate`].
pub struct Generate<S, C, I, R> {
    seed: S,
    condition: C,
    iterate: I,
    selector: R,
}

/// An observable driven by a state machine.
///
/// Starting from `seed`, emits `selector(&state)` while `condition(&state)`
/// holds, advancing with `state = iterate(state)`, and completes once the
/// condition fails. Every value is pushed during `subscribe`. An endless
/// generator only stops when its subscription is disposed from a callback.
///
/// ```rust
/// use reflux_core::SubscribeExt;
/// use reflux_stream::generate;
/// use std::sync::{Arc, Mutex};
///
/// let squares = Arc::new(Mutex::new(Vec::new()));
/// let sink = squares.clone();
///
/// generate(0, |i| *i < 5, |i| i + 1, |i| i * i)
///     .subscribe_next(move |x| sink.lock().unwrap().push(x));
///
/// assert_eq!(*squares.lock().unwrap(), vec![0, 1, 4, 9, 16]);
/// ```
pub fn generate<S, T, C, I, R>(
    seed: S,
    condition: C,
    iterate: I,
    selector: R,
) -> impl Observable<Item = T>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    C: Fn(&S) -> bool + Send + Sync + 'static,
    I: Fn(S) -> S + Send + Sync + 'static,
    R: Fn(&S) -> T + Send + Sync + 'static,
{
    try_generate(
        seed,
        move |s: &S| Ok(condition(s)),
        move |s| Ok(iterate(s)),
        move |s: &S| Ok(selector(s)),
    )
}

/// Like [`generate`], with fallible steps.
///
/// The first failing step ends the sequence with its error.
pub fn try_generate<S, T, C, I, R>(
    seed: S,
    condition: C,
    iterate: I,
    selector: R,
) -> Generate<S, C, I, R>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    C: Fn(&S) -> Result<bool> + Send + Sync + 'static,
    I: Fn(S) -> Result<S> + Send + Sync + 'static,
    R: Fn(&S) -> Result<T> + Send + Sync + 'static,
{
    Generate {
        seed,
        condition,
        iterate,
        selector,
    }
}

impl<S, T, C, I, R> Generate<S, C, I, R>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    C: Fn(&S) -> Result<bool> + Send + Sync + 'static,
    I: Fn(S) -> Result<S> + Send + Sync + 'static,
    R: Fn(&S) -> Result<T> + Send + Sync + 'static,
{
    fn run(&self, subscriber: &Subscriber<T>) -> Result<()> {
        let mut state = self.seed.clone();
        while !subscriber.is_closed() && (self.condition)(&state)? {
            subscriber.next((self.selector)(&state)?);
            state = (self.iterate)(state)?;
        }
        Ok(())
    }
}

impl<S, T, C, I, R> Observable for Generate<S, C, I, R>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    C: Fn(&S) -> Result<bool> + Send + Sync + 'static,
    I: Fn(S) -> Result<S> + Send + Sync + 'static,
    R: Fn(&S) -> Result<T> + Send + Sync + 'static,
{
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        match self.run(&subscriber) {
            Ok(()) => subscriber.complete(),
            Err(error) => subscriber.error(error),
        }
    }
}
