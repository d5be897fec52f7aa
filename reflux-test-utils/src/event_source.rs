// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A callback registry in the style of UI event APIs.

use parking_lot::Mutex;
use std::sync::Arc;

/// A handler receiving the event arguments only.
pub type Handler<A> = Arc<dyn Fn(A) + Send + Sync>;

/// A handler receiving the sender and the event arguments.
pub type PatternHandler<S, A> = Arc<dyn Fn(S, A) + Send + Sync>;

struct Registry<H: ?Sized> {
    handlers: Vec<Arc<H>>,
    attached: usize,
    detached: usize,
}

/// An event that handlers attach to and detach from.
///
/// Handlers are matched by pointer identity, so detaching needs the exact
/// `Arc` that was attached. Counters record every successful attach and detach
/// so tests can check for leaked handlers.
///
/// Raising an event invokes a snapshot of the handlers taken before the first
/// call, so handlers may detach themselves (or others) while being invoked.
pub struct EventSource<H: ?Sized> {
    registry: Arc<Mutex<Registry<H>>>,
}

impl<H: ?Sized + Send + Sync + 'static> EventSource<H> {
    /// An event with no handlers attached.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                handlers: Vec::new(),
                attached: 0,
                detached: 0,
            })),
        }
    }

    /// Attaches `handler`.
    pub fn add_handler(&self, handler: Arc<H>) {
        let mut registry = self.registry.lock();
        registry.handlers.push(handler);
        registry.attached += 1;
    }

    /// Detaches `handler`; returns `false` when it was not attached.
    pub fn remove_handler(&self, handler: &Arc<H>) -> bool {
        let target = Arc::as_ptr(handler).cast::<()>();
        let removed = {
            let mut registry = self.registry.lock();
            let index = registry
                .handlers
                .iter()
                .position(|h| Arc::as_ptr(h).cast::<()>() == target);
            index.map(|index| {
                registry.detached += 1;
                registry.handlers.remove(index)
            })
        };
        removed.is_some()
    }

    /// A closure attaching handlers to this event.
    pub fn attacher(&self) -> impl Fn(Arc<H>) + Send + Sync + 'static {
        let source = self.clone();
        move |handler| source.add_handler(handler)
    }

    /// A closure detaching handlers from this event.
    pub fn detacher(&self) -> impl Fn(Arc<H>) + Send + Sync + 'static {
        let source = self.clone();
        move |handler| {
            source.remove_handler(&handler);
        }
    }

    /// Number of handlers currently attached.
    pub fn handler_count(&self) -> usize {
        self.registry.lock().handlers.len()
    }

    /// Number of handlers ever attached.
    pub fn attach_count(&self) -> usize {
        self.registry.lock().attached
    }

    /// Number of handlers ever removed.
    pub fn detach_count(&self) -> usize {
        self.registry.lock().detached
    }

    fn snapshot(&self) -> Vec<Arc<H>> {
        self.registry.lock().handlers.clone()
    }
}

impl<A: Clone + 'static> EventSource<dyn Fn(A) + Send + Sync> {
    /// Invokes every attached handler with `args`.
    pub fn raise(&self, args: A) {
        for handler in self.snapshot() {
            handler(args.clone());
        }
    }
}

impl<S: Clone + 'static, A: Clone + 'static> EventSource<dyn Fn(S, A) + Send + Sync> {
    /// Invokes every attached handler with `sender` and `args`.
    pub fn raise_from(&self, sender: S, args: A) {
        for handler in self.snapshot() {
            handler(sender.clone(), args.clone());
        }
    }
}

impl<H: ?Sized> Clone for EventSource<H> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<H: ?Sized + Send + Sync + 'static> Default for EventSource<H> {
    fn default() -> Self {
        Self::new()
    }
}
