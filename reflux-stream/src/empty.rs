// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use reflux_core::{Observable, Subscriber};

/// See [`empty`].
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

/// An observable that completes immediately without emitting.
pub fn empty<T: Send + 'static>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T: Send + 'static> Observable for Empty<T> {
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        subscriber.complete();
    }
}
