// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Errors for exercising failure paths in operators.

use reflux_core::{IntoRefluxError, RefluxError};

/// A user-level failure raised on purpose by a test.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("injected failure: {0}")]
    Injected(String),

    #[error("rejected value: {0}")]
    Rejected(i64),
}

/// Wraps `TestError::Injected(message)` as a user error.
pub fn injected_error(message: impl Into<String>) -> RefluxError {
    TestError::Injected(message.into()).into_reflux()
}
