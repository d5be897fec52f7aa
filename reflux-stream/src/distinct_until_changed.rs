// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consecutive-duplicate suppression.

use crate::distinct_until_changed_by::DistinctUntilChangedByExt;
use reflux_core::Observable;

/// Extension trait providing the
/// [`distinct_until_changed`](Self::distinct_until_changed) operator.
pub trait DistinctUntilChangedExt: Observable + Sized
where
    Self::Item: Clone + PartialEq,
{
    /// Forwards a value only when it differs from the last forwarded value.
    ///
    /// Input `a, a, b, a, a` becomes `a, b, a`. Use
    /// [`distinct_until_changed_by`](DistinctUntilChangedByExt::distinct_until_changed_by)
    /// for a custom equality.
    fn distinct_until_changed(self) -> impl Observable<Item = Self::Item> {
        self.distinct_until_changed_by(|last, current| last == current)
    }
}

impl<O> DistinctUntilChangedExt for O
where
    O: Observable,
    O::Item: Clone + PartialEq,
{
}
