// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridges callback-registration APIs into observables.
//!
//! Both bridges take an `attach` function and a matching `detach` function.
//! Every subscription creates its own handler, passes it to `attach`, and
//! passes that same `Arc` to `detach` exactly once when the subscription is
//! disposed, however many times `dispose` is called. The resulting
//! observables never complete or fail on their own.
//!
//! Handlers may be invoked from any thread. Invocations are serialized before
//! they reach the observer.

use reflux_core::{create, Observable, Subscriber, Subscription};
use std::sync::Arc;

/// A handler receiving the event arguments.
pub type EventHandler<A> = Arc<dyn Fn(A) + Send + Sync>;

/// A handler receiving the event sender and arguments.
pub type PatternHandler<S, A> = Arc<dyn Fn(S, A) + Send + Sync>;

/// One event raised through a sender/arguments handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPattern<S, A> {
    /// The object that raised the event
    pub sender: S,
    /// The event payload
    pub args: A,
}

/// An observable emitting the arguments of every event raised after
/// subscription.
///
/// ```rust
/// use reflux_core::SubscribeExt;
/// use reflux_stream::{from_event, EventHandler};
/// use std::sync::{Arc, Mutex};
///
/// let handlers: Arc<Mutex<Vec<EventHandler<u32>>>> = Arc::default();
/// let (registry, unregistry) = (handlers.clone(), handlers.clone());
///
/// let clicks = from_event(
///     move |h| registry.lock().unwrap().push(h),
///     move |h| unregistry.lock().unwrap().retain(|x| !Arc::ptr_eq(x, &h)),
/// );
///
/// let subscription = clicks.subscribe_next(|button| println!("clicked {button}"));
/// assert_eq!(handlers.lock().unwrap().len(), 1);
///
/// subscription.dispose();
/// assert!(handlers.lock().unwrap().is_empty());
/// ```
pub fn from_event<A, Att, Det>(attach: Att, detach: Det) -> impl Observable<Item = A>
where
    A: Send + 'static,
    Att: Fn(EventHandler<A>) + Send + Sync + 'static,
    Det: Fn(EventHandler<A>) + Send + Sync + 'static,
{
    let detach = Arc::new(detach);
    create(move |subscriber: Subscriber<A>| {
        let downstream = subscriber.clone();
        let handler: EventHandler<A> = Arc::new(move |args: A| downstream.next(args));
        attach_until_disposed(subscriber.subscription(), handler, &attach, &detach);
    })
}

/// An observable emitting an [`EventPattern`] for every event raised after
/// subscription.
pub fn from_event_pattern<S, A, Att, Det>(
    attach: Att,
    detach: Det,
) -> impl Observable<Item = EventPattern<S, A>>
where
    S: Send + 'static,
    A: Send + 'static,
    Att: Fn(PatternHandler<S, A>) + Send + Sync + 'static,
    Det: Fn(PatternHandler<S, A>) + Send + Sync + 'static,
{
    let detach = Arc::new(detach);
    create(move |subscriber: Subscriber<EventPattern<S, A>>| {
        let downstream = subscriber.clone();
        let handler: PatternHandler<S, A> = Arc::new(move |sender: S, args: A| {
            downstream.next(EventPattern { sender, args });
        });
        attach_until_disposed(subscriber.subscription(), handler, &attach, &detach);
    })
}

fn attach_until_disposed<H, Att, Det>(
    subscription: &Subscription,
    handler: H,
    attach: &Att,
    detach: &Arc<Det>,
) where
    H: Clone + Send + 'static,
    Att: Fn(H),
    Det: Fn(H) + Send + Sync + 'static,
{
    attach(handler.clone());
    reflux_core::debug!("event handler attached");

    let detach = Arc::clone(detach);
    subscription.add(move || {
        detach(handler);
        reflux_core::debug!("event handler detached");
    });
}
