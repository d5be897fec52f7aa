// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::SubscribeExt;
use reflux_stream::prelude::*;
use reflux_test_utils::{injected_error, TestObserver, TestSubject};

#[test]
fn test_filter_keeps_matching_values() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::new();

    // Act
    range(1, 10)?
        .filter(|x| x % 3 == 0)
        .subscribe(observer.clone());

    // Assert
    assert_eq!(observer.values(), vec![3, 6, 9]);
    assert!(observer.is_completed());

    Ok(())
}

#[test]
fn test_filter_rejecting_everything_still_completes() -> anyhow::Result<()> {
    // Arrange
    let observer = TestObserver::<i64>::new();

    // Act
    range(1, 10)?.filter(|_| false).subscribe(observer.clone());

    // Assert
    assert!(observer.values().is_empty());
    assert!(observer.is_completed());

    Ok(())
}

#[test]
fn test_try_filter_failure_terminates() -> anyhow::Result<()> {
    // Arrange
    let subject = TestSubject::<i32>::new();
    let observer = TestObserver::new();
    subject
        .clone()
        .try_filter(|x| {
            if *x == 13 {
                Err(injected_error("unlucky"))
            } else {
                Ok(x % 2 == 1)
            }
        })
        .subscribe(observer.clone());

    // Act
    for x in [1, 2, 3, 13, 15] {
        subject.next(x);
    }

    // Assert
    assert_eq!(observer.values(), vec![1, 3]);
    assert_eq!(
        observer.error().as_deref(),
        Some("User error: injected failure: unlucky")
    );
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}
