// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A trait for types that carry the instant at which they were observed.
///
/// Logging operators read the instant through this trait without knowing the
/// concrete wrapper type.
///
/// # Examples
///
/// ```
/// use reflux_core::HasTimestamp;
/// use std::time::Instant;
///
/// struct Keystroke {
///     key: char,
///     at: Instant,
/// }
///
/// impl HasTimestamp for Keystroke {
///     type Timestamp = Instant;
///
///     fn timestamp(&self) -> Instant {
///         self.at
///     }
/// }
/// ```
pub trait HasTimestamp {
    /// The type representing the timestamp
    type Timestamp: Ord + Copy + Send + Sync + std::fmt::Debug;

    /// Returns the timestamp value for this item.
    fn timestamp(&self) -> Self::Timestamp;
}
