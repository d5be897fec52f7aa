// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::Subscription;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counting_teardown(counter: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
    let counter = counter.clone();
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_dispose_is_idempotent() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let subscription = Subscription::from_fn(counting_teardown(&runs));

    // Act
    subscription.dispose();
    subscription.clone().dispose();
    subscription.dispose();

    // Assert
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_composite_disposes_every_member_once() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let first = Subscription::from_fn(counting_teardown(&runs));
    let second = Subscription::from_fn(counting_teardown(&runs));
    let composite = Subscription::composite([first.clone(), second.clone()]);

    // Act
    first.dispose();
    composite.dispose();
    composite.dispose();

    // Assert
    assert!(second.is_disposed());
    assert_eq!(runs.load(Ordering::SeqCst), 2);

    Ok(())
}

#[test]
fn test_guard_disposes_on_scope_exit() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let subscription = Subscription::from_fn(counting_teardown(&runs));

    // Act
    {
        let guard = subscription.clone().into_guard();
        assert!(!guard.subscription().is_disposed());
    }

    // Assert
    assert!(subscription.is_disposed());
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    Ok(())
}

#[test]
fn test_child_added_to_disposed_parent_is_disposed_immediately() -> anyhow::Result<()> {
    // Arrange
    let parent = Subscription::new();
    parent.dispose();

    // Act
    let child = parent.child();

    // Assert
    assert!(child.is_disposed());

    Ok(())
}

#[test]
fn test_dispose_from_another_thread() -> anyhow::Result<()> {
    // Arrange
    let runs = Arc::new(AtomicUsize::new(0));
    let subscription = Subscription::from_fn(counting_teardown(&runs));
    let remote = subscription.clone();

    // Act
    std::thread::spawn(move || remote.dispose())
        .join()
        .map_err(|_| anyhow::anyhow!("dispose thread panicked"))?;

    // Assert
    assert!(subscription.is_disposed());
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    Ok(())
}
