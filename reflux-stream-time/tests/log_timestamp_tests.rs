// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux_core::{HasTimestamp, SubscribeExt};
use reflux_runtime::{VirtualInstant, VirtualScheduler};
use reflux_stream::{range, MapExt};
use reflux_stream_time::{format_timestamped_line, DebounceExt, TimestampLoggingExt};
use reflux_test_utils::{Notification, RecordingSink, TestObserver, TestSubject};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_with_timestamp_action_passes_values_through() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let stamps = Arc::new(Mutex::new(Vec::new()));
    let sink = stamps.clone();
    let observer = TestObserver::new();

    // Act
    range(1, 3)?
        .with_timestamp_action(scheduler.clone(), move |item| {
            sink.lock().push((*item.value(), item.timestamp()));
        })
        .subscribe(observer.clone());

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
    assert_eq!(
        *stamps.lock(),
        vec![
            (1, VirtualInstant::ZERO),
            (2, VirtualInstant::ZERO),
            (3, VirtualInstant::ZERO)
        ]
    );

    Ok(())
}

#[test]
fn test_log_lines_around_throttle() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let subject = TestSubject::new();
    let before = RecordingSink::new();
    let after = RecordingSink::new();
    let observer = TestObserver::new();
    subject
        .clone()
        .log_timestamp_to("Before throttle", scheduler.clone(), before.writer())
        .throttle(Duration::from_secs(1), scheduler.clone())
        .log_timestamp_to("After throttle", scheduler.clone(), after.writer())
        .subscribe(observer.clone());

    // Act
    scheduler.advance_by(Duration::from_millis(2_050));
    subject.next("r");
    scheduler.advance_by(Duration::from_millis(150));
    subject.next("rx");
    scheduler.advance_by(Duration::from_secs(2));

    // Assert
    assert_eq!(
        before.lines(),
        vec!["Before throttle: 2:50 - r", "Before throttle: 2:200 - rx"]
    );
    assert_eq!(after.lines(), vec!["After throttle: 3:200 - rx"]);
    assert_eq!(observer.values(), vec!["rx"]);

    Ok(())
}

#[test]
fn test_log_line_counts_from_scheduler_origin() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    scheduler.advance_by(Duration::from_millis(61_007));
    let sink = RecordingSink::new();

    // Act
    range(7, 1)?
        .map(|x| x * 6)
        .log_timestamp_to("answer", scheduler.clone(), sink.writer())
        .subscribe_next(|_| {});

    // Assert
    assert_eq!(sink.lines(), vec!["answer: 1:7 - 42"]);

    Ok(())
}

#[test]
fn test_format_timestamped_line_does_not_pad() -> anyhow::Result<()> {
    // Arrange
    let elapsed = Duration::from_millis(3_005);

    // Act
    let line = format_timestamped_line("tick", elapsed, &1.5);

    // Assert
    assert_eq!(line, "tick: 3:5 - 1.5");

    Ok(())
}
