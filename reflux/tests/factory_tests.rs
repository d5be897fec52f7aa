// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflux::prelude::*;
use reflux::RefluxError;
use std::fmt::Display;
use std::sync::Arc;

/// Subscribes with callbacks that write one line per notification.
fn transcript<O>(source: &O) -> Vec<String>
where
    O: Observable,
    O::Item: Display,
{
    let lines = Arc::new(Mutex::new(Vec::new()));
    let (next, error, completed) = (lines.clone(), lines.clone(), lines.clone());
    source.subscribe_callbacks(
        move |x| next.lock().push(format!("OnNext: {x}")),
        move |e| error.lock().push(format!("OnError: {e}")),
        move || completed.lock().push("OnCompleted".to_string()),
    );
    let lines = lines.lock().clone();
    lines
}

#[test]
fn test_empty_only_completes() -> anyhow::Result<()> {
    // Arrange
    let source = empty::<i32>();

    // Act
    let lines = transcript(&source);

    // Assert
    assert_eq!(lines, vec!["OnCompleted"]);

    Ok(())
}

#[test]
fn test_throw_only_errors() -> anyhow::Result<()> {
    // Arrange
    let source = throw::<i32>(RefluxError::stream_error("Oops"));

    // Act
    let lines = transcript(&source);

    // Assert
    assert_eq!(lines, vec!["OnError: Stream processing error: Oops"]);

    Ok(())
}

#[test]
fn test_return_emits_one_value() -> anyhow::Result<()> {
    // Arrange
    let source = just(42);

    // Act
    let lines = transcript(&source);

    // Assert
    assert_eq!(lines, vec!["OnNext: 42", "OnCompleted"]);

    Ok(())
}

#[test]
fn test_range_counts_from_start() -> anyhow::Result<()> {
    // Arrange
    let source = range(5, 3)?;

    // Act
    let lines = transcript(&source);

    // Assert
    assert_eq!(
        lines,
        vec!["OnNext: 5", "OnNext: 6", "OnNext: 7", "OnCompleted"]
    );

    Ok(())
}

#[test]
fn test_range_rejects_negative_count_before_subscribing() -> anyhow::Result<()> {
    // Arrange
    let start = 0;

    // Act
    let result = range(start, -1);

    // Assert
    assert!(matches!(result, Err(RefluxError::InvalidArgument { .. })));

    Ok(())
}

#[test]
fn test_generate_squares() -> anyhow::Result<()> {
    // Arrange
    let source = generate(0i32, |i| *i < 5, |i| i + 1, |i| i * i);

    // Act
    let lines = transcript(&source);

    // Assert
    assert_eq!(
        lines,
        vec![
            "OnNext: 0",
            "OnNext: 1",
            "OnNext: 4",
            "OnNext: 9",
            "OnNext: 16",
            "OnCompleted"
        ]
    );

    Ok(())
}

#[test]
fn test_never_stays_silent_until_disposed() -> anyhow::Result<()> {
    // Arrange
    let source = never::<String>();
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = lines.clone();

    // Act
    let subscription = source.subscribe_next(move |x| sink.lock().push(x));
    subscription.dispose();

    // Assert
    assert!(lines.lock().is_empty());
    assert!(subscription.is_disposed());

    Ok(())
}

#[test]
fn test_generate_pipeline_with_side_effects() -> anyhow::Result<()> {
    // Arrange
    let log = Arc::new(Mutex::new(Vec::new()));
    let (before, after) = (log.clone(), log.clone());
    let source = generate(0i32, |i| *i < 4, |i| i + 1, |i| *i)
        .tap(move |x| before.lock().push(format!("Do: {x}")))
        .map(|x| x * 10)
        .filter(|x| *x != 20);

    // Act
    let sink = after.clone();
    source.subscribe_next(move |x| sink.lock().push(format!("OnNext: {x}")));

    // Assert
    assert_eq!(
        *log.lock(),
        vec![
            "Do: 0", "OnNext: 0", "Do: 1", "OnNext: 10", "Do: 2", "Do: 3", "OnNext: 30"
        ]
    );

    Ok(())
}
