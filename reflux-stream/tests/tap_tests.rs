// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux_core::{RefluxError, SubscribeExt};
use reflux_stream::prelude::*;
use reflux_test_utils::{injected_error, Notification, TestObserver, TestSubject};
use std::sync::Arc;

#[test]
fn test_tap_values_pass_through_unchanged() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    range(1, 3)?.tap(|_| {}).subscribe(observer.clone());

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Next(1),
            Notification::Next(2),
            Notification::Next(3),
            Notification::Completed,
        ]
    );

    Ok(())
}

#[test]
fn test_tap_runs_before_forwarding() -> anyhow::Result<()> {
    // Arrange
    let log = Arc::new(Mutex::new(Vec::new()));
    let (tap_log, sink_log) = (log.clone(), log.clone());
    let subject = TestSubject::<&'static str>::new();
    subject
        .clone()
        .tap(move |x| tap_log.lock().push(format!("tap {x}")))
        .subscribe_next(move |x| sink_log.lock().push(format!("next {x}")));

    // Act
    subject.next("a");
    subject.next("b");

    // Assert
    assert_eq!(*log.lock(), vec!["tap a", "next a", "tap b", "next b"]);

    Ok(())
}

#[test]
fn test_try_tap_failure_replaces_value_with_error() -> anyhow::Result<()> {
    // Arrange
    let subject = TestSubject::<i32>::new();
    let observer = TestObserver::new();
    subject
        .clone()
        .try_tap(|x| {
            if *x > 1 {
                Err(injected_error("side effect"))
            } else {
                Ok(())
            }
        })
        .subscribe(observer.clone());

    // Act
    subject.next(1);
    subject.next(2);
    subject.next(3);

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Next(1),
            Notification::Error("User error: injected failure: side effect".to_string()),
        ]
    );
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_tap_with_observes_error_and_completion() -> anyhow::Result<()> {
    // Arrange
    let log = Arc::new(Mutex::new(Vec::new()));
    let (on_error, on_completed) = (log.clone(), log.clone());
    let actions = || {
        let (on_error, on_completed) = (on_error.clone(), on_completed.clone());
        TapActions::new()
            .on_error(move |e: &RefluxError| {
                on_error.lock().push(format!("error: {e}"));
                Ok(())
            })
            .on_completed(move || {
                on_completed.lock().push("completed".to_string());
                Ok(())
            })
    };

    // Act
    just(1).tap_with(actions()).subscribe_next(|_| {});
    throw::<i32>(RefluxError::stream_error("bad"))
        .tap_with(actions())
        .subscribe_next(|_| {});

    // Assert
    assert_eq!(
        *log.lock(),
        vec![
            "completed".to_string(),
            "error: Stream processing error: bad".to_string()
        ]
    );

    Ok(())
}

#[test]
fn test_failing_completion_action_turns_completion_into_error() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    just(5)
        .tap_with(TapActions::new().on_completed(|| Err(injected_error("flush"))))
        .subscribe(observer.clone());

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Next(5),
            Notification::Error("User error: injected failure: flush".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_failing_error_action_replaces_error() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::<i32>::new();

    // Act
    throw(RefluxError::stream_error("original"))
        .tap_with(TapActions::new().on_error(|_| Err(injected_error("handler"))))
        .subscribe(observer.clone());

    // Assert
    assert_eq!(
        observer.error().as_deref(),
        Some("User error: injected failure: handler")
    );

    Ok(())
}
