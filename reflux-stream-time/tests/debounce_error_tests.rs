// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::{RefluxError, SubscribeExt};
use reflux_runtime::VirtualScheduler;
use reflux_stream::MapExt;
use reflux_stream_time::DebounceExt;
use reflux_test_utils::{injected_error, Notification, TestObserver, TestSubject};
use std::time::Duration;

const QUIET: Duration = Duration::from_millis(200);

#[test]
fn test_error_discards_pending_value_and_passes_through() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let subject = TestSubject::<i32>::new();
    let observer = TestObserver::new();
    subject
        .clone()
        .debounce(QUIET, scheduler.clone())
        .subscribe(observer.clone());

    // Act
    subject.next(1);
    subject.error(RefluxError::stream_error("sensor lost"));
    scheduler.advance_by(Duration::from_secs(1));

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![Notification::Error(
            "Stream processing error: sensor lost".to_string()
        )]
    );
    assert_eq!(scheduler.pending_timers(), 0);

    Ok(())
}

#[test]
fn test_error_after_emission_keeps_emitted_values() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let subject = TestSubject::<i32>::new();
    let observer = TestObserver::new();
    subject
        .clone()
        .debounce(QUIET, scheduler.clone())
        .subscribe(observer.clone());

    // Act
    subject.next(1);
    scheduler.advance_by(QUIET);
    subject.error(injected_error("late"));

    // Assert
    assert_eq!(
        observer.notifications(),
        vec![
            Notification::Next(1),
            Notification::Error("User error: injected failure: late".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_failure_downstream_of_debounce_cancels_upstream() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let subject = TestSubject::<i32>::new();
    let observer = TestObserver::new();
    subject
        .clone()
        .debounce(QUIET, scheduler.clone())
        .try_map(|x| {
            if x == 2 {
                Err(injected_error("two"))
            } else {
                Ok(x)
            }
        })
        .subscribe(observer.clone());

    // Act
    subject.next(2);
    scheduler.advance_by(QUIET);
    subject.next(3);
    scheduler.advance_by(QUIET);

    // Assert
    assert_eq!(
        observer.error().as_deref(),
        Some("User error: injected failure: two")
    );
    assert!(observer.values().is_empty());
    assert_eq!(subject.subscriber_count(), 0);
    assert_eq!(scheduler.pending_timers(), 0);

    Ok(())
}
