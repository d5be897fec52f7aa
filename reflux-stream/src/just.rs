// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{Observable, Subscriber};

/// See [`just`].
pub struct Just<T> {
    value: T,
}

/// An observable that emits `value` once and completes (Rx `Return`).
pub fn just<T>(value: T) -> Just<T>
where
    T: Clone + Send + Sync + 'static,
{
    Just { value }
}

impl<T> Observable for Just<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        subscriber.next(self.value.clone());
        subscriber.complete();
    }
}
