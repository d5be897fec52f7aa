// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A hand-driven hot source.

use parking_lot::Mutex;
use reflux_core::{Observable, RefluxError, Subscriber};
use std::sync::Arc;

enum Terminal {
    Completed,
    Failed(RefluxError),
}

struct State<T> {
    subscribers: Vec<(u64, Subscriber<T>)>,
    next_id: u64,
    terminal: Option<Terminal>,
}

/// A hot [`Observable`] the test pushes into directly.
///
/// Every current subscriber receives each pushed notification. Subscribers
/// arriving after a terminal notification receive that terminal immediately.
///
/// ```rust
/// use reflux_core::SubscribeExt;
/// use reflux_test_utils::{TestObserver, TestSubject};
///
/// let subject = TestSubject::new();
/// let observer = TestObserver::new();
/// subject.subscribe(observer.clone());
///
/// subject.next("a");
/// subject.next("b");
///
/// assert_eq!(observer.values(), vec!["a", "b"]);
/// ```
pub struct TestSubject<T> {
    state: Arc<Mutex<State<T>>>,
}

impl<T: Clone + Send + 'static> TestSubject<T> {
    /// A subject with no subscribers.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                subscribers: Vec::new(),
                next_id: 0,
                terminal: None,
            })),
        }
    }

    /// Pushes `value` to every attached subscriber.
    pub fn next(&self, value: T) {
        for subscriber in self.snapshot() {
            subscriber.next(value.clone());
        }
    }

    /// Fails every attached subscriber with a clone of `error`.
    pub fn error(&self, error: RefluxError) {
        let subscribers = self.terminate(Terminal::Failed(error.clone()));
        for subscriber in subscribers {
            subscriber.error(error.clone());
        }
    }

    /// Completes every attached subscriber.
    pub fn complete(&self) {
        for subscriber in self.terminate(Terminal::Completed) {
            subscriber.complete();
        }
    }

    /// Number of subscriptions that are still attached.
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    fn snapshot(&self) -> Vec<Subscriber<T>> {
        self.state
            .lock()
            .subscribers
            .iter()
            .map(|(_, s)| s.clone())
            .collect()
    }

    fn terminate(&self, terminal: Terminal) -> Vec<Subscriber<T>> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            return Vec::new();
        }
        state.terminal = Some(terminal);
        state.subscribers.drain(..).map(|(_, s)| s).collect()
    }
}

impl<T: Clone + Send + 'static> Default for TestSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TestSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + 'static> Observable for TestSubject<T> {
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        let mut state = self.state.lock();
        match &state.terminal {
            Some(Terminal::Completed) => {
                drop(state);
                subscriber.complete();
            }
            Some(Terminal::Failed(error)) => {
                let error = error.clone();
                drop(state);
                subscriber.error(error);
            }
            None => {
                let id = state.next_id;
                state.next_id += 1;
                state.subscribers.push((id, subscriber.clone()));
                drop(state);

                let registry = Arc::downgrade(&self.state);
                subscriber.subscription().add(move || {
                    if let Some(registry) = registry.upgrade() {
                        let removed = {
                            let mut state = registry.lock();
                            state
                                .subscribers
                                .iter()
                                .position(|(sid, _)| *sid == id)
                                .map(|index| state.subscribers.remove(index))
                        };
                        drop(removed);
                    }
                });
            }
        }
    }
}
