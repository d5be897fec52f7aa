// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Generator loop paced by a scheduler.

use core::time::Duration;
use parking_lot::Mutex;
use reflux_core::{Observable, Result, Subscriber, Subscription};
use reflux_runtime::Scheduler;
use std::sync::Arc;

type Condition<S> = Box<dyn Fn(&S) -> Result<bool> + Send + Sync>;
type Iterate<S> = Box<dyn Fn(S) -> Result<S> + Send + Sync>;
type Selector<S, T> = Box<dyn Fn(&S) -> Result<T> + Send + Sync>;
type DelaySelector<S> = Box<dyn Fn(&S) -> Result<Duration> + Send + Sync>;

struct Steps<S, T> {
    condition: Condition<S>,
    iterate: Iterate<S>,
    selector: Selector<S, T>,
    delay: DelaySelector<S>,
}

/// See [`generate_with_time`] and [`try_generate_with_time`].
pub struct GenerateWithTime<S, T, Sch> {
    seed: S,
    steps: Arc<Steps<S, T>>,
    scheduler: Sch,
}

/// A generator whose emissions are spaced out in time.
///
/// Behaves like [`reflux_stream::generate`], except that every value after
/// the first is emitted `delay_selector(&state)` after the previous one, where
/// `state` is the state that value is selected from. The first value is
/// emitted during `subscribe`. Completion follows as soon as the condition
/// fails, without waiting.
///
/// ```rust
/// use reflux_core::SubscribeExt;
/// use reflux_runtime::VirtualScheduler;
/// use reflux_stream_time::generate_with_time;
/// use reflux_test_utils::TestObserver;
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let observer = TestObserver::new();
/// generate_with_time(
///     0u64,
///     |i| *i < 4,
///     |i| i + 1,
///     |i| i * i,
///     |i| Duration::from_secs(*i),
///     scheduler.clone(),
/// )
/// .subscribe(observer.clone());
///
/// assert_eq!(observer.values(), vec![0]);
/// scheduler.advance_by(Duration::from_secs(1));
/// assert_eq!(observer.values(), vec![0, 1]);
/// scheduler.advance_by(Duration::from_secs(2 + 3));
/// assert_eq!(observer.values(), vec![0, 1, 4, 9]);
/// assert!(observer.is_completed());
/// ```
pub fn generate_with_time<S, T, C, I, R, D, Sch>(
    seed: S,
    condition: C,
    iterate: I,
    selector: R,
    delay_selector: D,
    scheduler: Sch,
) -> GenerateWithTime<S, T, Sch>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    C: Fn(&S) -> bool + Send + Sync + 'static,
    I: Fn(S) -> S + Send + Sync + 'static,
    R: Fn(&S) -> T + Send + Sync + 'static,
    D: Fn(&S) -> Duration + Send + Sync + 'static,
    Sch: Scheduler,
{
    try_generate_with_time(
        seed,
        move |s: &S| Ok(condition(s)),
        move |s| Ok(iterate(s)),
        move |s: &S| Ok(selector(s)),
        move |s: &S| Ok(delay_selector(s)),
        scheduler,
    )
}

/// Like [`generate_with_time`], with fallible steps.
///
/// The first failing step ends the sequence with its error.
pub fn try_generate_with_time<S, T, C, I, R, D, Sch>(
    seed: S,
    condition: C,
    iterate: I,
    selector: R,
    delay_selector: D,
    scheduler: Sch,
) -> GenerateWithTime<S, T, Sch>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    C: Fn(&S) -> Result<bool> + Send + Sync + 'static,
    I: Fn(S) -> Result<S> + Send + Sync + 'static,
    R: Fn(&S) -> Result<T> + Send + Sync + 'static,
    D: Fn(&S) -> Result<Duration> + Send + Sync + 'static,
    Sch: Scheduler,
{
    GenerateWithTime {
        seed,
        steps: Arc::new(Steps {
            condition: Box::new(condition),
            iterate: Box::new(iterate),
            selector: Box::new(selector),
            delay: Box::new(delay_selector),
        }),
        scheduler,
    }
}

impl<S, T, Sch> Observable for GenerateWithTime<S, T, Sch>
where
    S: Clone + Send + Sync + 'static,
    T: Send + 'static,
    Sch: Scheduler,
{
    type Item = T;

    fn subscribe_with(&self, subscriber: Subscriber<T>) {
        let timer = Arc::new(Mutex::new(None::<Subscription>));
        let cancel = Arc::clone(&timer);
        subscriber.subscription().add(move || {
            let pending = cancel.lock().take();
            if let Some(pending) = pending {
                pending.dispose();
            }
        });

        let run = Arc::new(Run {
            steps: Arc::clone(&self.steps),
            scheduler: self.scheduler.clone(),
            subscriber,
            timer,
        });

        let seed = self.seed.clone();
        match (run.steps.condition)(&seed) {
            Ok(true) => run.emit_and_advance(seed),
            Ok(false) => run.subscriber.complete(),
            Err(error) => run.subscriber.error(error),
        }
    }
}

/// State of one subscription.
struct Run<S, T, Sch> {
    steps: Arc<Steps<S, T>>,
    scheduler: Sch,
    subscriber: Subscriber<T>,
    timer: Arc<Mutex<Option<Subscription>>>,
}

impl<S, T, Sch> Run<S, T, Sch>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
    Sch: Scheduler,
{
    /// Emits the value for `state` and schedules the next state, if any.
    fn emit_and_advance(self: Arc<Self>, state: S) {
        if self.subscriber.is_closed() {
            return;
        }
        match self.advance(state) {
            Ok(Some((next, delay))) => self.schedule(next, delay),
            Ok(None) => self.subscriber.complete(),
            Err(error) => self.subscriber.error(error),
        }
    }

    fn advance(&self, state: S) -> Result<Option<(S, Duration)>> {
        self.subscriber.next((self.steps.selector)(&state)?);
        let next = (self.steps.iterate)(state)?;
        if !(self.steps.condition)(&next)? {
            return Ok(None);
        }
        let delay = (self.steps.delay)(&next)?;
        Ok(Some((next, delay)))
    }

    fn schedule(self: Arc<Self>, next: S, delay: Duration) {
        let run = Arc::clone(&self);
        let timer = self
            .scheduler
            .schedule_after(delay, Box::new(move || run.emit_and_advance(next)));

        let previous = self.timer.lock().replace(timer);
        drop(previous);
        if self.subscriber.is_closed() {
            let timer = self.timer.lock().take();
            if let Some(timer) = timer {
                timer.dispose();
            }
        }
    }
}
