// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use parking_lot::{Mutex, ReentrantMutex};
use reflux_core::{Observable, Observer, RefluxError, Subscriber, Subscription};
use reflux_runtime::Scheduler;
use std::sync::Arc;

/// Extension trait providing the `debounce` / `throttle` operator.
pub trait DebounceExt: Observable + Sized {
    /// Emits a value only after `duration` has passed without another value
    /// arriving.
    ///
    /// This implements **trailing debounce** semantics:
    /// - When a value arrives, start/restart the timer
    /// - If no new value arrives before the timer expires, emit the latest value
    /// - If a new value arrives, discard the pending value and restart the timer
    /// - When the source completes, emit any pending value immediately, then
    ///   complete
    ///
    /// Errors pass through immediately and discard any pending value.
    /// Disposing the subscription cancels the pending timer.
    ///
    /// ```rust
    /// use reflux_core::SubscribeExt;
    /// use reflux_runtime::VirtualScheduler;
    /// use reflux_stream_time::DebounceExt;
    /// use reflux_test_utils::{TestObserver, TestSubject};
    /// use std::time::Duration;
    ///
    /// let scheduler = VirtualScheduler::new();
    /// let subject = TestSubject::new();
    /// let observer = TestObserver::new();
    /// subject
    ///     .clone()
    ///     .debounce(Duration::from_millis(500), scheduler.clone())
    ///     .subscribe(observer.clone());
    ///
    /// subject.next("r");
    /// scheduler.advance_by(Duration::from_millis(100));
    /// subject.next("rx");
    /// scheduler.advance_by(Duration::from_millis(499));
    /// assert!(observer.values().is_empty());
    ///
    /// scheduler.advance_by(Duration::from_millis(1));
    /// assert_eq!(observer.values(), vec!["rx"]);
    /// ```
    fn debounce<Sch>(self, duration: Duration, scheduler: Sch) -> impl Observable<Item = Self::Item>
    where
        Sch: Scheduler,
    {
        Debounce {
            source: self,
            duration,
            scheduler,
        }
    }

    /// Rx name for [`debounce`](Self::debounce); behaves identically.
    fn throttle<Sch>(self, duration: Duration, scheduler: Sch) -> impl Observable<Item = Self::Item>
    where
        Sch: Scheduler,
    {
        self.debounce(duration, scheduler)
    }
}

impl<O: Observable> DebounceExt for O {}

struct Debounce<S, Sch> {
    source: S,
    duration: Duration,
    scheduler: Sch,
}

struct DebounceState<T> {
    pending: Option<T>,
    timer: Option<Subscription>,
    // Bumped on every arrival and terminal; a timer only emits if it still
    // holds the current generation.
    generation: u64,
}

impl<T> DebounceState<T> {
    fn reset(&mut self) -> (Option<T>, Option<Subscription>) {
        self.generation = self.generation.wrapping_add(1);
        (self.pending.take(), self.timer.take())
    }
}

impl<S, Sch> Observable for Debounce<S, Sch>
where
    S: Observable,
    Sch: Scheduler,
{
    type Item = S::Item;

    fn subscribe_with(&self, subscriber: Subscriber<S::Item>) {
        let state = Arc::new(Mutex::new(DebounceState {
            pending: None,
            timer: None,
            generation: 0,
        }));

        let cancel = Arc::clone(&state);
        subscriber.subscription().add(move || {
            let (_, timer) = cancel.lock().reset();
            if let Some(timer) = timer {
                timer.dispose();
            }
        });

        let upstream = subscriber.subscription().child();
        self.source.subscribe_with(Subscriber::new(
            DebounceObserver {
                downstream: subscriber,
                duration: self.duration,
                scheduler: self.scheduler.clone(),
                state,
                emit: Arc::new(ReentrantMutex::new(())),
            },
            upstream,
        ));
    }
}

struct DebounceObserver<T, Sch> {
    downstream: Subscriber<T>,
    duration: Duration,
    scheduler: Sch,
    state: Arc<Mutex<DebounceState<T>>>,
    // Held from taking a value until it is delivered, so a timer flush and a
    // terminal never interleave. Never taken by the cancel teardown.
    emit: Arc<ReentrantMutex<()>>,
}

impl<T, Sch> Observer<T> for DebounceObserver<T, Sch>
where
    T: Send + 'static,
    Sch: Scheduler,
{
    fn on_next(&mut self, value: T) {
        let (generation, previous) = {
            let mut state = self.state.lock();
            let (_, previous) = state.reset();
            state.pending = Some(value);
            (state.generation, previous)
        };
        if let Some(previous) = previous {
            previous.dispose();
        }

        let state = Arc::clone(&self.state);
        let emit = Arc::clone(&self.emit);
        let downstream = self.downstream.clone();
        let timer = self.scheduler.schedule_after(
            self.duration,
            Box::new(move || {
                let _emitting = emit.lock();
                let value = {
                    let mut state = state.lock();
                    if state.generation != generation {
                        return;
                    }
                    state.timer = None;
                    state.pending.take()
                };
                if let Some(value) = value {
                    downstream.next(value);
                }
            }),
        );

        let mut state = self.state.lock();
        if state.generation == generation && state.pending.is_some() {
            state.timer = Some(timer);
        } else {
            drop(state);
            timer.dispose();
        }
    }

    fn on_error(&mut self, error: RefluxError) {
        let _emitting = self.emit.lock();
        let (_, timer) = self.state.lock().reset();
        if let Some(timer) = timer {
            timer.dispose();
        }
        self.downstream.error(error);
    }

    fn on_completed(&mut self) {
        let _emitting = self.emit.lock();
        let (pending, timer) = self.state.lock().reset();
        if let Some(timer) = timer {
            timer.dispose();
        }
        if let Some(value) = pending {
            reflux_core::debug!("debounce flushing pending value on completion");
            self.downstream.next(value);
        }
        self.downstream.complete();
    }
}
