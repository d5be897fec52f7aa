// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::stream::{FusedStream, Stream, StreamExt};
use reflux_core::{Observable, Observer, RefluxError, Result, StreamItem, Subscription};
use std::future::Future;

/// Extension trait turning an observable into async consumers.
pub trait IntoStreamExt: Observable + Sized {
    /// Subscribes immediately and exposes the notifications as a
    /// [`Stream`] of [`StreamItem`]s.
    ///
    /// Values are buffered without bound until polled. Completion ends the
    /// stream; an error is yielded once as [`StreamItem::Error`] and then the
    /// stream ends. Dropping the stream disposes the subscription.
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use futures::StreamExt;
    /// use reflux_core::StreamItem;
    /// use reflux_exec::IntoStreamExt;
    /// use reflux_stream::range;
    ///
    /// let items: Vec<_> = block_on(range(1, 3)?.into_stream().collect());
    /// assert_eq!(
    ///     items,
    ///     vec![StreamItem::Value(1), StreamItem::Value(2), StreamItem::Value(3)]
    /// );
    /// # Ok::<(), reflux_core::RefluxError>(())
    /// ```
    fn into_stream(self) -> ObservableStream<Self::Item> {
        let (sender, receiver) = unbounded();
        let subscription = Subscription::new();
        self.subscribe_with(reflux_core::Subscriber::new(
            ChannelObserver { sender },
            subscription.clone(),
        ));
        ObservableStream {
            receiver,
            subscription,
        }
    }

    /// Calls `f` for every value until the sequence completes.
    ///
    /// The subscription starts when the returned future is first polled.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence, after `f` has seen every
    /// value emitted before it.
    fn for_each<F>(self, mut f: F) -> impl Future<Output = Result<()>> + Send
    where
        F: FnMut(Self::Item) + Send,
    {
        async move {
            let mut stream = self.into_stream();
            while let Some(item) = stream.next().await {
                match item {
                    StreamItem::Value(value) => f(value),
                    StreamItem::Error(error) => return Err(error),
                }
            }
            Ok(())
        }
    }

    /// Collects every value into a `Vec` once the sequence completes.
    ///
    /// # Errors
    ///
    /// Returns the error that terminated the sequence; values received before
    /// it are discarded.
    fn to_vec(self) -> impl Future<Output = Result<Vec<Self::Item>>> + Send {
        async move {
            let mut values = Vec::new();
            self.for_each(|value| values.push(value)).await?;
            Ok(values)
        }
    }
}

impl<O: Observable> IntoStreamExt for O {}

/// A pull-based view of one subscription.
///
/// Created by [`IntoStreamExt::into_stream`].
#[must_use = "streams do nothing unless polled; dropping disposes the subscription"]
pub struct ObservableStream<T> {
    receiver: UnboundedReceiver<StreamItem<T>>,
    subscription: Subscription,
}

impl<T> ObservableStream<T> {
    /// The subscription feeding this stream.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl<T> Stream for ObservableStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.receiver.size_hint()
    }
}

impl<T> FusedStream for ObservableStream<T> {
    fn is_terminated(&self) -> bool {
        self.receiver.is_terminated()
    }
}

impl<T> Drop for ObservableStream<T> {
    fn drop(&mut self) {
        self.subscription.dispose();
    }
}

struct ChannelObserver<T> {
    sender: UnboundedSender<StreamItem<T>>,
}

impl<T: Send + 'static> Observer<T> for ChannelObserver<T> {
    fn on_next(&mut self, value: T) {
        if self.sender.unbounded_send(StreamItem::Value(value)).is_err() {
            reflux_core::trace!("stream receiver dropped, discarding value");
        }
    }

    fn on_error(&mut self, error: RefluxError) {
        if self.sender.unbounded_send(StreamItem::Error(error)).is_err() {
            reflux_core::trace!("stream receiver dropped, discarding error");
        }
        self.sender.close_channel();
    }

    fn on_completed(&mut self) {
        self.sender.close_channel();
    }
}
