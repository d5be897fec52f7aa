// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux_core::{
    create, BoxObservable, CallbackObserver, Observable, RefluxError, SubscribeExt, Subscriber,
    Subscription,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_each_subscription_runs_the_producer_again() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let source = create(move |subscriber| {
        let run = counter.fetch_add(1, Ordering::SeqCst);
        subscriber.next(run);
        subscriber.complete();
    });
    let seen = Arc::new(Mutex::new(Vec::new()));

    // Act
    let first = seen.clone();
    source.subscribe_next(move |x| first.lock().push(x));
    let second = seen.clone();
    source.subscribe_next(move |x| second.lock().push(x));

    // Assert
    assert_eq!(*seen.lock(), vec![0, 1]);

    Ok(())
}

#[test]
fn test_producer_teardown_runs_on_dispose() -> anyhow::Result<()> {
    // Arrange
    let released = Arc::new(AtomicUsize::new(0));
    let counter = released.clone();
    let source = create(move |subscriber: Subscriber<i32>| {
        let counter = counter.clone();
        subscriber.subscription().add(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    });

    // Act
    let subscription = source.subscribe_next(|_| {});
    assert_eq!(released.load(Ordering::SeqCst), 0);
    subscription.dispose();
    subscription.dispose();

    // Assert
    assert_eq!(released.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_subscribe_callbacks_receives_error() -> anyhow::Result<()> {
    // Arrange
    let source = create(|subscriber: Subscriber<i32>| {
        subscriber.next(1);
        subscriber.error(RefluxError::stream_error("broken"));
    });
    let log = Arc::new(Mutex::new(Vec::new()));
    let (on_next, on_error, on_completed) = (log.clone(), log.clone(), log.clone());

    // Act
    let subscription = source.subscribe_callbacks(
        move |x| on_next.lock().push(format!("OnNext: {x}")),
        move |e| on_error.lock().push(format!("OnError: {e}")),
        move || on_completed.lock().push("OnCompleted".to_string()),
    );

    // Assert
    assert_eq!(
        *log.lock(),
        vec![
            "OnNext: 1".to_string(),
            "OnError: Stream processing error: broken".to_string()
        ]
    );
    assert!(subscription.is_disposed());

    Ok(())
}

#[test]
fn test_arc_wrapped_observable_subscribes() -> anyhow::Result<()> {
    // Arrange
    let producer = create(|subscriber: Subscriber<&'static str>| {
        subscriber.next("shared");
        subscriber.complete();
    });
    let source: BoxObservable<&'static str> = Arc::new(producer);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    // Act
    Observable::subscribe_with(
        &source,
        Subscriber::new(
            CallbackObserver::new().with_next(move |x| sink.lock().push(x)),
            Subscription::new(),
        ),
    );

    // Assert
    assert_eq!(*seen.lock(), vec!["shared"]);

    Ok(())
}
