// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the reflux observable engine.
//!
//! Every failure that reaches an observer travels through `on_error` as a
//! [`RefluxError`]. Factory argument checks use the same type but are reported
//! synchronously from the factory call, before any subscription exists.
//!
//! # Examples
//!
//! ```
//! use reflux_core::{RefluxError, Result};
//!
//! fn parse(input: &str) -> Result<u32> {
//!     input
//!         .parse()
//!         .map_err(|_| RefluxError::stream_error(format!("not a number: {input}")))
//! }
//!
//! assert!(parse("12").is_ok());
//! assert!(parse("twelve").is_err());
//! ```

/// Root error type for all reflux operations
#[derive(Debug, thiserror::Error)]
pub enum RefluxError {
    /// A producer or operator failed while computing a value it meant to push.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors returned by user-provided selectors, predicates and actions.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Malformed factory arguments, rejected before subscription.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Which argument was rejected and why
        context: String,
    },
}

impl RefluxError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` for errors raised by argument validation.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for reflux operations
pub type Result<T> = std::result::Result<T, RefluxError>;

/// Extension trait for converting errors into `RefluxError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so a
/// fallible selector can write `value.parse::<u32>().map_err(IntoRefluxError::into_reflux)`.
pub trait IntoRefluxError {
    /// Convert this error into a `RefluxError` with additional context
    fn into_reflux_error(self, context: &str) -> RefluxError;

    /// Convert this error into a `RefluxError` without additional context
    fn into_reflux(self) -> RefluxError
    where
        Self: Sized,
    {
        self.into_reflux_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRefluxError for E {
    fn into_reflux_error(self, context: &str) -> RefluxError {
        if context.is_empty() {
            RefluxError::user_error(self)
        } else {
            RefluxError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(RefluxError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RefluxError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                RefluxError::UserError(inner) => RefluxError::StreamProcessingError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}

impl Clone for RefluxError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned; keep its message
            Self::UserError(e) => Self::UserError(Box::new(UserMessage(e.to_string()))),
            Self::InvalidArgument { context } => Self::InvalidArgument {
                context: context.clone(),
            },
        }
    }
}

/// The message of a cloned user error.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct UserMessage(String);
