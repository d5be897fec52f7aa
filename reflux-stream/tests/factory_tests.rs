// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{RefluxError, SubscribeExt};
use reflux_stream::{empty, just, never, range, throw};
use reflux_test_utils::{injected_error, Notification, TestObserver};

#[test]
fn test_empty_only_completes() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::<i32>::new();

    // Act
    let subscription = empty().subscribe(observer.clone());

    // Assert
    assert_eq!(observer.notifications(), vec![Notification::Completed]);
    assert!(subscription.is_disposed());

    Ok(())
}

#[test]
fn test_throw_only_errors() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::<i32>::new();

    // Act
    throw(RefluxError::stream_error("An error occurred")).subscribe(observer.clone());

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![Notification::Error(
            "Stream processing error: An error occurred".to_string()
        )]
    );

    Ok(())
}

#[test]
fn test_throw_delivers_to_every_subscription() -> anyhow::Result<()> {
    // Arrange
    let source = throw::<i32>(RefluxError::stream_error("again"));
    let (first, second) = (TestObserver::new(), TestObserver::new());

    // Act
    source.subscribe(first.clone());
    source.subscribe(second.clone());

    // Assert
    assert!(first.error().is_some());
    assert_eq!(first.error(), second.error());

    Ok(())
}

#[test]
fn test_throw_keeps_user_error_for_every_subscription() -> anyhow::Result<()> {
    // Arrange
    let source = throw::<i32>(injected_error("boom"));
    let (first, second) = (TestObserver::new(), TestObserver::new());

    // Act
    source.subscribe(first.clone());
    source.subscribe(second.clone());

    // Assert
    let expected = Some("User error: injected failure: boom".to_string());
    assert_eq!(first.error(), expected);
    assert_eq!(second.error(), expected);

    Ok(())
}

#[test]
fn test_just_emits_value_then_completes() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    just("hello").subscribe(observer.clone());

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![Notification::Next("hello"), Notification::Completed]
    );

    Ok(())
}

#[test]
fn test_range_emits_consecutive_integers() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    range(1, 10)?.subscribe(observer.clone());

    // Assert
    assert_eq!(observer.values(), (1..=10).collect::<Vec<i64>>());
    assert!(observer.is_completed());

    Ok(())
}

#[test]
fn test_range_with_zero_count_only_completes() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    range(42, 0)?.subscribe(observer.clone());

    // Assert
    assert_eq!(observer.notifications(), vec![Notification::Completed]);

    Ok(())
}

#[test]
fn test_range_from_negative_start() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    range(-2, 4)?.subscribe(observer.clone());

    // Assert
    assert_eq!(observer.values(), vec![-2, -1, 0, 1]);

    Ok(())
}

#[test]
fn test_range_rejects_negative_count() {
    let error = range(0, -1).unwrap_err();

    assert!(error.is_invalid_argument());
}

#[test]
fn test_range_rejects_overflow() {
    assert!(range(i64::MAX, 1).is_ok());
    assert!(range(i64::MAX, 2).unwrap_err().is_invalid_argument());
}

#[test]
fn test_range_is_cold() -> anyhow::Result<()> {
    // Arrange
    let source = range(5, 2)?;
    let (first, second) = (TestObserver::new(), TestObserver::new());

    // Act
    source.subscribe(first.clone());
    source.subscribe(second.clone());

    // Assert
    assert_eq!(first.notifications(), second.notifications());
    assert_eq!(second.values(), vec![5, 6]);

    Ok(())
}

#[test]
fn test_never_emits_nothing_until_disposed() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::<i32>::new();

    // Act
    let subscription = never().subscribe(observer.clone());

    // Assert
    assert!(observer.is_empty());
    assert!(!subscription.is_disposed());
    subscription.dispose();
    assert!(subscription.is_disposed());
    assert!(observer.is_empty());

    Ok(())
}
