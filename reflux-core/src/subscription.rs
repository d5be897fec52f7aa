// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposal handles.
//!
//! A [`Subscription`] owns the cleanup actions of one production run: timers to
//! cancel, handlers to detach, child subscriptions to release. Disposing it runs
//! every action exactly once. Clones share the same state, so any clone may
//! dispose and every clone observes [`Subscription::is_disposed`].

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};
use parking_lot::Mutex;
use std::sync::Arc;

enum Teardown {
    Action(Box<dyn FnOnce() + Send>),
    Child(Subscription),
}

impl Teardown {
    fn run(self) {
        match self {
            Teardown::Action(action) => action(),
            Teardown::Child(child) => child.dispose(),
        }
    }
}

struct Inner {
    disposed: AtomicBool,
    teardowns: Mutex<Vec<Teardown>>,
}

/// A cancellation handle for a subscription (the Rx `IDisposable`).
///
/// `dispose` is idempotent and may be called from any thread, including from
/// inside the observer callback that is currently being notified. Dropping a
/// `Subscription` does **not** dispose it; use [`Subscription::into_guard`]
/// for scope-bound disposal.
///
/// # Example
///
/// ```
/// use reflux_core::Subscription;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let released = Arc::new(AtomicUsize::new(0));
/// let subscription = Subscription::new();
/// let counter = released.clone();
/// subscription.add(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// subscription.dispose();
/// subscription.dispose();
/// assert_eq!(released.load(Ordering::SeqCst), 1);
/// assert!(subscription.is_disposed());
/// ```
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

impl Subscription {
    /// Creates an active subscription with no cleanup actions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                disposed: AtomicBool::new(false),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Creates a subscription that runs `teardown` when disposed.
    #[must_use]
    pub fn from_fn(teardown: impl FnOnce() + Send + 'static) -> Self {
        let subscription = Self::new();
        subscription.add(teardown);
        subscription
    }

    /// Groups several subscriptions so that one `dispose` releases all of them.
    ///
    /// ```
    /// use reflux_core::Subscription;
    ///
    /// let moves = Subscription::new();
    /// let input = Subscription::new();
    /// let both = Subscription::composite([moves.clone(), input.clone()]);
    ///
    /// both.dispose();
    /// assert!(moves.is_disposed() && input.is_disposed());
    /// ```
    #[must_use]
    pub fn composite(children: impl IntoIterator<Item = Subscription>) -> Self {
        let subscription = Self::new();
        for child in children {
            subscription.add_child(child);
        }
        subscription
    }

    /// Registers a cleanup action.
    ///
    /// If the subscription is already disposed the action runs immediately.
    pub fn add(&self, teardown: impl FnOnce() + Send + 'static) {
        self.push(Teardown::Action(Box::new(teardown)));
    }

    /// Registers a child that is disposed together with this subscription.
    ///
    /// Disposing the child on its own leaves this subscription untouched.
    pub fn add_child(&self, child: Subscription) {
        if Arc::ptr_eq(&self.inner, &child.inner) {
            return;
        }
        self.push(Teardown::Child(child));
    }

    /// Creates a new subscription owned by this one.
    #[must_use]
    pub fn child(&self) -> Subscription {
        let child = Subscription::new();
        self.add_child(child.clone());
        child
    }

    /// Releases every registered resource. Repeated calls are no-ops.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        // Run outside the lock: teardowns may dispose other subscriptions
        // or call back into this one.
        let teardowns = core::mem::take(&mut *self.inner.teardowns.lock());
        crate::trace!("disposing subscription ({} teardowns)", teardowns.len());
        for teardown in teardowns {
            teardown.run();
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Wraps the subscription in a guard that disposes it on drop.
    #[must_use]
    pub fn into_guard(self) -> SubscriptionGuard {
        SubscriptionGuard { subscription: self }
    }

    fn push(&self, teardown: Teardown) {
        let mut teardowns = self.inner.teardowns.lock();
        if self.is_disposed() {
            drop(teardowns);
            teardown.run();
        } else {
            teardowns.push(teardown);
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

/// Disposes the wrapped [`Subscription`] when dropped.
///
/// ```
/// use reflux_core::Subscription;
///
/// let subscription = Subscription::new();
/// {
///     let _guard = subscription.clone().into_guard();
/// }
/// assert!(subscription.is_disposed());
/// ```
#[derive(Debug)]
#[must_use = "dropping the guard disposes the subscription immediately"]
pub struct SubscriptionGuard {
    subscription: Subscription,
}

impl SubscriptionGuard {
    /// Returns the guarded subscription.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.subscription.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn teardown_added_after_dispose_runs_immediately() {
        let subscription = Subscription::new();
        subscription.dispose();

        let ran = Arc::new(AtomicUsize::new(0));
        let counter = ran.clone();
        subscription.add(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disposing_child_leaves_parent_active() {
        let parent = Subscription::new();
        let child = parent.child();

        child.dispose();

        assert!(child.is_disposed());
        assert!(!parent.is_disposed());
    }

    #[test]
    fn disposing_parent_disposes_children() {
        let parent = Subscription::new();
        let child = parent.child();
        let grandchild = child.child();

        parent.dispose();

        assert!(child.is_disposed());
        assert!(grandchild.is_disposed());
    }

    #[test]
    fn dispose_from_inside_teardown_does_not_deadlock() {
        let subscription = Subscription::new();
        let reentrant = subscription.clone();
        subscription.add(move || reentrant.dispose());

        subscription.dispose();

        assert!(subscription.is_disposed());
    }
}
