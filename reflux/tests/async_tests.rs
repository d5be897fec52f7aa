// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use reflux::prelude::*;
use reflux_test_utils::FakeTextBox;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_for_each_over_range() -> anyhow::Result<()> {
    // Arrange
    let source = range(0, 10)?;
    let mut lines = Vec::new();

    // Act
    source.for_each(|x| lines.push(format!("OnNext:  {x}"))).await?;

    // Assert
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.first().map(String::as_str), Some("OnNext:  0"));
    assert_eq!(lines.last().map(String::as_str), Some("OnNext:  9"));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttled_text_on_tokio_scheduler() -> anyhow::Result<()> {
    // Arrange
    let scheduler = TokioScheduler::new();
    let text_box = FakeTextBox::new();
    let mut stream = from_event_pattern(
        text_box.text_changed().attacher(),
        text_box.text_changed().detacher(),
    )
    .map(|event| event.sender.text())
    .throttle(Duration::from_secs(1), scheduler)
    .distinct_until_changed()
    .into_stream();

    // Act
    text_box.type_text("rx");
    sleep(Duration::from_millis(1_500)).await;
    text_box.set_text("r");
    text_box.set_text("rx");
    sleep(Duration::from_millis(1_500)).await;
    text_box.set_text("rxjs");
    sleep(Duration::from_millis(1_500)).await;

    // Assert
    let first = stream.next().await.and_then(StreamItem::ok);
    let second = stream.next().await.and_then(StreamItem::ok);
    assert_eq!(first.as_deref(), Some("rx"));
    assert_eq!(second.as_deref(), Some("rxjs"));

    drop(stream);
    assert_eq!(text_box.text_changed().handler_count(), 0);

    Ok(())
}
