// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for debugging and logging pipelines (Rx `Do`).
//!
//! `tap` observes a sequence without changing it. Every action runs before the
//! notification it observes is forwarded, so a `tap` placed after a `map`
//! sees exactly what the next stage will see.
//!
//! ```rust
//! use reflux_core::SubscribeExt;
//! use reflux_stream::prelude::*;
//!
//! let subscription = range(1, 3)?
//!     .tap(|x| println!("Before filter: {x}"))
//!     .filter(|x| x % 2 == 1)
//!     .tap(|x| println!("After filter: {x}"))
//!     .subscribe_next(|_| {});
//! assert!(subscription.is_disposed());
//! # Ok::<(), reflux_core::RefluxError>(())
//! ```
//!
//! # Error Handling
//!
//! An action that returns `Err` is treated as a failure of the operator
//! itself: the failure replaces the notification being observed and is pushed
//! downstream as the terminal error.

use reflux_core::{Observable, Observer, RefluxError, Result, Subscriber};
use std::sync::Arc;

type NextAction<T> = Arc<dyn Fn(&T) -> Result<()> + Send + Sync>;
type ErrorAction = Arc<dyn Fn(&RefluxError) -> Result<()> + Send + Sync>;
type CompletedAction = Arc<dyn Fn() -> Result<()> + Send + Sync>;

/// The side effects run by [`TapExt::tap_with`].
///
/// Each action is optional and fallible.
pub struct TapActions<T> {
    next: Option<NextAction<T>>,
    error: Option<ErrorAction>,
    completed: Option<CompletedAction>,
}

impl<T> TapActions<T> {
    /// Actions that do nothing until callbacks are added.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            completed: None,
        }
    }

    /// Runs `action` for every value before it is forwarded.
    #[must_use]
    pub fn on_next(mut self, action: impl Fn(&T) -> Result<()> + Send + Sync + 'static) -> Self {
        self.next = Some(Arc::new(action));
        self
    }

    /// Runs `action` with the terminal error before it is forwarded.
    #[must_use]
    pub fn on_error(
        mut self,
        action: impl Fn(&RefluxError) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.error = Some(Arc::new(action));
        self
    }

    /// Runs `action` before completion is forwarded.
    #[must_use]
    pub fn on_completed(mut self, action: impl Fn() -> Result<()> + Send + Sync + 'static) -> Self {
        self.completed = Some(Arc::new(action));
        self
    }
}

impl<T> Default for TapActions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TapActions<T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
            error: self.error.clone(),
            completed: self.completed.clone(),
        }
    }
}

/// Extension trait providing the [`tap`](Self::tap) family of operators.
pub trait TapExt: Observable + Sized {
    /// Calls `action` with each value, then forwards the value unchanged.
    fn tap<F>(self, action: F) -> impl Observable<Item = Self::Item>
    where
        F: Fn(&Self::Item) + Send + Sync + 'static,
    {
        self.try_tap(move |value| {
            action(value);
            Ok(())
        })
    }

    /// Like [`tap`](Self::tap), with a fallible action.
    fn try_tap<F>(self, action: F) -> impl Observable<Item = Self::Item>
    where
        F: Fn(&Self::Item) -> Result<()> + Send + Sync + 'static,
    {
        self.tap_with(TapActions::new().on_next(action))
    }

    /// Runs the given actions for values, the terminal error and completion.
    ///
    /// ```rust
    /// use reflux_core::SubscribeExt;
    /// use reflux_stream::prelude::*;
    ///
    /// just(7)
    ///     .tap_with(
    ///         TapActions::new()
    ///             .on_next(|x: &i32| {
    ///                 println!("OnNext: {x}");
    ///                 Ok(())
    ///             })
    ///             .on_completed(|| {
    ///                 println!("OnCompleted");
    ///                 Ok(())
    ///             }),
    ///     )
    ///     .subscribe_next(|_| {});
    /// ```
    fn tap_with(self, actions: TapActions<Self::Item>) -> impl Observable<Item = Self::Item> {
        Tap {
            source: self,
            actions,
        }
    }
}

impl<O: Observable> TapExt for O {}

struct Tap<S: Observable> {
    source: S,
    actions: TapActions<S::Item>,
}

impl<S: Observable> Observable for Tap<S> {
    type Item = S::Item;

    fn subscribe_with(&self, subscriber: Subscriber<S::Item>) {
        let upstream = subscriber.subscription().child();
        self.source.subscribe_with(Subscriber::new(
            TapObserver {
                downstream: subscriber,
                actions: self.actions.clone(),
            },
            upstream,
        ));
    }
}

struct TapObserver<T> {
    downstream: Subscriber<T>,
    actions: TapActions<T>,
}

impl<T: Send + 'static> Observer<T> for TapObserver<T> {
    fn on_next(&mut self, value: T) {
        let outcome = match &self.actions.next {
            Some(action) => action(&value),
            None => Ok(()),
        };
        match outcome {
            Ok(()) => self.downstream.next(value),
            Err(error) => self.downstream.error(error),
        }
    }

    fn on_error(&mut self, error: RefluxError) {
        let error = match &self.actions.error {
            Some(action) => action(&error).err().unwrap_or(error),
            None => error,
        };
        self.downstream.error(error);
    }

    fn on_completed(&mut self) {
        let outcome = match &self.actions.completed {
            Some(action) => action(),
            None => Ok(()),
        };
        match outcome {
            Ok(()) => self.downstream.complete(),
            Err(error) => self.downstream.error(error),
        }
    }
}
