// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Observer, RefluxError, Subscription};
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

struct Inner<T> {
    observer: Mutex<Option<Box<dyn Observer<T>>>>,
    subscription: Subscription,
}

/// The producer-facing end of one subscription.
///
/// A `Subscriber` wraps the downstream [`Observer`] and enforces the
/// observable grammar on behalf of every producer and operator:
///
/// - nothing is delivered once the subscription is disposed;
/// - nothing is delivered after `error` or `complete`;
/// - a terminal notification disposes the subscription, releasing upstream
///   resources without an explicit `dispose` from the consumer.
///
/// Notifications are serialized: concurrent producers (for example a timer
/// thread and an event thread) never run the observer in parallel. Calling
/// back into the same subscriber from inside its own observer is not
/// supported.
///
/// Clones share the same observer and subscription.
pub struct Subscriber<T> {
    inner: Arc<Inner<T>>,
}

impl<T: 'static> Subscriber<T> {
    /// Wraps `observer`, delivering to it until `subscription` is disposed.
    pub fn new(observer: impl Observer<T>, subscription: Subscription) -> Self {
        Self {
            inner: Arc::new(Inner {
                observer: Mutex::new(Some(Box::new(observer))),
                subscription,
            }),
        }
    }

    /// Pushes a value downstream.
    pub fn next(&self, value: T) {
        if self.inner.subscription.is_disposed() {
            return;
        }
        let mut slot = self.inner.observer.lock();
        // Re-check under the lock: a dispose may have raced the first check.
        if self.inner.subscription.is_disposed() {
            return;
        }
        if let Some(observer) = slot.as_mut() {
            observer.on_next(value);
        }
    }

    /// Terminates the sequence with an error and releases its resources.
    pub fn error(&self, error: RefluxError) {
        if let Some(mut observer) = self.take_observer() {
            crate::debug!("subscriber terminated with error: {}", error);
            observer.on_error(error);
        }
        self.inner.subscription.dispose();
    }

    /// Completes the sequence and releases its resources.
    pub fn complete(&self) {
        if let Some(mut observer) = self.take_observer() {
            observer.on_completed();
        }
        self.inner.subscription.dispose();
    }

    /// Returns `true` once the subscriber will accept no more notifications.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.subscription.is_disposed() || self.inner.observer.lock().is_none()
    }

    /// The subscription governing this subscriber.
    ///
    /// Producers register their cleanup actions here.
    #[must_use]
    pub fn subscription(&self) -> &Subscription {
        &self.inner.subscription
    }

    fn take_observer(&self) -> Option<Box<dyn Observer<T>>> {
        if self.inner.subscription.is_disposed() {
            return None;
        }
        self.inner.observer.lock().take()
    }
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("subscription", &self.inner.subscription)
            .finish_non_exhaustive()
    }
}
