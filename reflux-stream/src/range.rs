// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{Observable, RefluxError, Result, Subscriber};

/// See [`range`].
#[derive(Debug, Clone, Copy)]
pub struct Range {
    start: i64,
    count: i64,
}

/// An observable emitting `count` consecutive integers from `start`, then
/// completing.
///
/// # Errors
///
/// Returns [`RefluxError::InvalidArgument`] when `count` is negative or when
/// the last value would overflow `i64`. Nothing is subscribed in that case.
///
/// ```rust
/// use reflux_stream::range;
///
/// assert!(range(1, 10).is_ok());
/// assert!(range(1, -1).unwrap_err().is_invalid_argument());
/// assert!(range(i64::MAX, 2).is_err());
/// ```
pub fn range(start: i64, count: i64) -> Result<Range> {
    if count < 0 {
        return Err(RefluxError::invalid_argument(format!(
            "range count must be non-negative, got {count}"
        )));
    }
    if count > 0 && start.checked_add(count - 1).is_none() {
        return Err(RefluxError::invalid_argument(format!(
            "range of {count} values from {start} overflows i64"
        )));
    }
    Ok(Range { start, count })
}

impl Observable for Range {
    type Item = i64;

    fn subscribe_with(&self, subscriber: Subscriber<i64>) {
        for offset in 0..self.count {
            if subscriber.is_closed() {
                return;
            }
            subscriber.next(self.start + offset);
        }
        subscriber.complete();
    }
}
