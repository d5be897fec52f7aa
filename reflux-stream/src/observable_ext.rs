// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{BoxObservable, Observable};
use std::sync::Arc;

/// Conversions available on every [`Observable`].
pub trait ObservableExt: Observable + Sized {
    /// Erases the concrete operator type.
    ///
    /// Useful for storing differently built chains in one collection or
    /// returning one of several chains from a function.
    fn boxed(self) -> BoxObservable<Self::Item> {
        Arc::new(self)
    }
}

impl<O: Observable> ObservableExt for O {}
