// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use reflux_core::{Observable, RefluxError, Subscriber};

/// See [`throw`].
pub struct Throw<T> {
    error: RefluxError,
    _item: PhantomData<fn() -> T>,
}

/// An observable that fails immediately with `error`.
///
/// Each subscription receives its own clone of the error. A cloned
/// [`RefluxError::UserError`] stays a `UserError` with the same message,
/// but its source chain is not carried over.
pub fn throw<T: Send + 'static>(error: RefluxError) -> Throw<T> {
    Throw {
        error,
        _item: PhantomData,
    }
}

impl<T: Send + 'static> Observable for Throw<T> {
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        subscriber.error(self.error.clone());
    }
}
