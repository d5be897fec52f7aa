// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RefluxError;

/// One notification of a sequence, materialized as data.
///
/// Push-based observers receive values and the terminal error through
/// separate callbacks; pull-based consumers (see `reflux-exec`) get both on
/// one channel as `StreamItem`s. Completion has no variant: it is the end of
/// the channel.
#[derive(Debug, Clone)]
pub enum StreamItem<T> {
    Value(T),
    /// The error that ended the sequence. Nothing follows it.
    Error(RefluxError),
}

/// Values compare by value. An error is never equal to anything, since
/// `RefluxError` carries no equality.
impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> StreamItem<T> {
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// The value, if any.
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    /// The error, if any.
    pub fn err(self) -> Option<RefluxError> {
        self.into_result().err()
    }

    /// Transforms the value and leaves an error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StreamItem<U> {
        match self {
            StreamItem::Value(value) => StreamItem::Value(f(value)),
            StreamItem::Error(error) => StreamItem::Error(error),
        }
    }

    pub fn into_result(self) -> Result<T, RefluxError> {
        match self {
            StreamItem::Value(value) => Ok(value),
            StreamItem::Error(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, RefluxError>> for StreamItem<T> {
    fn from(result: Result<T, RefluxError>) -> Self {
        result.map_or_else(StreamItem::Error, StreamItem::Value)
    }
}

impl<T> From<StreamItem<T>> for Result<T, RefluxError> {
    fn from(item: StreamItem<T>) -> Self {
        item.into_result()
    }
}
