// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux_core::{Observer, RefluxError};
use std::sync::Arc;

/// One recorded notification. Errors are kept as their display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<T> {
    Next(T),
    Error(String),
    Completed,
}

/// An [`Observer`] that records what it receives.
///
/// Clones share the same log: subscribe one clone and assert on another.
pub struct TestObserver<T> {
    log: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> TestObserver<T> {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything received so far, in arrival order.
    pub fn notifications(&self) -> Vec<Notification<T>>
    where
        T: Clone,
    {
        self.log.lock().clone()
    }

    /// Only the values received so far.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.log
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// The error message, if the sequence failed.
    pub fn error(&self) -> Option<String> {
        self.log.lock().iter().find_map(|n| match n {
            Notification::Error(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.log
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Completed))
    }

    /// Number of notifications of any kind.
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }
}

impl<T> Clone for TestObserver<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}

impl<T> Default for TestObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Observer<T> for TestObserver<T> {
    fn on_next(&mut self, value: T) {
        self.log.lock().push(Notification::Next(value));
    }

    fn on_error(&mut self, error: RefluxError) {
        self.log.lock().push(Notification::Error(error.to_string()));
    }

    fn on_completed(&mut self) {
        self.log.lock().push(Notification::Completed);
    }
}
