// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The consumer side of the observable contract.

use crate::RefluxError;

/// A consumer of a push-based sequence.
///
/// A well-behaved producer calls `on_next` zero or more times followed by at
/// most one of `on_error` / `on_completed`. Observers never need to guard
/// against calls after a terminal notification themselves: the
/// [`Subscriber`](crate::Subscriber) wrapping them drops anything that arrives
/// late.
pub trait Observer<T>: Send + 'static {
    /// Receives the next value of the sequence.
    fn on_next(&mut self, value: T);

    /// Receives the error that terminated the sequence.
    fn on_error(&mut self, error: RefluxError);

    /// Receives the completion of the sequence.
    fn on_completed(&mut self);
}

impl<T, O> Observer<T> for Box<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&mut self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&mut self, error: RefluxError) {
        (**self).on_error(error);
    }

    fn on_completed(&mut self) {
        (**self).on_completed();
    }
}

type NextFn<T> = Box<dyn FnMut(T) + Send>;
type ErrorFn = Box<dyn FnMut(RefluxError) + Send>;
type CompletedFn = Box<dyn FnMut() + Send>;

/// An [`Observer`] assembled from up to three independent closures.
///
/// Any callback may be omitted. An error arriving with no error callback
/// registered is logged and otherwise ignored.
///
/// # Examples
///
/// ```
/// use reflux_core::{CallbackObserver, Observer};
///
/// let mut observer = CallbackObserver::new()
///     .with_next(|x: i32| println!("OnNext:  {x}"))
///     .with_completed(|| println!("OnCompleted"));
///
/// observer.on_next(42);
/// observer.on_completed();
/// ```
pub struct CallbackObserver<T> {
    next: Option<NextFn<T>>,
    error: Option<ErrorFn>,
    completed: Option<CompletedFn>,
}

impl<T> CallbackObserver<T> {
    /// Creates an observer that ignores every notification.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            completed: None,
        }
    }

    /// Sets the value callback.
    #[must_use]
    pub fn with_next(mut self, f: impl FnMut(T) + Send + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the error callback.
    #[must_use]
    pub fn with_error(mut self, f: impl FnMut(RefluxError) + Send + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    #[must_use]
    pub fn with_completed(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.completed = Some(Box::new(f));
        self
    }
}

impl<T> Default for CallbackObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Observer<T> for CallbackObserver<T> {
    fn on_next(&mut self, value: T) {
        if let Some(next) = self.next.as_mut() {
            next(value);
        }
    }

    fn on_error(&mut self, error: RefluxError) {
        match self.error.as_mut() {
            Some(callback) => callback(error),
            None => crate::warn!("unhandled stream error: {}", error),
        }
    }

    fn on_completed(&mut self) {
        if let Some(completed) = self.completed.as_mut() {
            completed();
        }
    }
}
