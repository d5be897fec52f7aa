// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use reflux_core::{Observable, Subscriber};

/// See [`never`].
pub struct Never<T> {
    _item: PhantomData<fn() -> T>,
}

/// An observable that never notifies its subscribers.
///
/// Disposing the returned subscription is the only way such a subscription
/// ends.
pub fn never<T: Send + 'static>() -> Never<T> {
    Never { _item: PhantomData }
}

impl<T: Send + 'static> Observable for Never<T> {
    type Item = T;

    fn subscribe_with(&self, _subscriber: Subscriber<T>) {}
}
