// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::ops::Deref;
use reflux_core::HasTimestamp;

/// A value paired with the scheduler instant it was stamped at.
///
/// Produced by [`timestamp`](crate::TimestampExt::timestamp). Both parts are
/// read-only; [`into_inner`](Self::into_inner) unwraps the value.
///
/// Ordering compares timestamps only.
#[derive(Debug, Clone, Copy)]
pub struct InstantTimestamped<T, I> {
    value: T,
    timestamp: I,
}

impl<T, I> InstantTimestamped<T, I> {
    /// Pairs `value` with `timestamp`.
    pub fn new(value: T, timestamp: I) -> Self {
        Self { value, timestamp }
    }

    /// Borrows the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, I> HasTimestamp for InstantTimestamped<T, I>
where
    I: Ord + Copy + Send + Sync + Debug,
{
    type Timestamp = I;

    fn timestamp(&self) -> I {
        self.timestamp
    }
}

impl<T: PartialEq, I: PartialEq> PartialEq for InstantTimestamped<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && self.value == other.value
    }
}

impl<T: Eq, I: Eq> Eq for InstantTimestamped<T, I> {}

impl<T: PartialEq, I: Ord> PartialOrd for InstantTimestamped<T, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.timestamp.cmp(&other.timestamp))
    }
}

impl<T: Eq, I: Ord> Ord for InstantTimestamped<T, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl<T, I> Deref for InstantTimestamped<T, I> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Display, I: Debug> Display for InstantTimestamped<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.value, self.timestamp)
    }
}
