// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Headless stand-ins for a desktop form and its text box.

use crate::event_source::EventSource;
use crate::fixtures::MouseEventArgs;
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;

/// Event raised with `(form, args)` whenever the pointer moves.
pub type MouseMoveEvent = EventSource<dyn Fn(FakeForm, MouseEventArgs) + Send + Sync>;

/// Event raised with `(text_box, ())` whenever the text is set.
pub type TextChangedEvent = EventSource<dyn Fn(FakeTextBox, ()) + Send + Sync>;

struct FormInner {
    title: String,
    mouse_move: MouseMoveEvent,
}

/// A form that raises mouse-move events on demand.
#[derive(Clone)]
pub struct FakeForm {
    inner: Arc<FormInner>,
}

impl FakeForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(FormInner {
                title: title.into(),
                mouse_move: EventSource::new(),
            }),
        }
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn mouse_move(&self) -> &MouseMoveEvent {
        &self.inner.mouse_move
    }

    /// Simulates the pointer moving to `(x, y)`.
    pub fn move_mouse(&self, x: i32, y: i32) {
        self.inner
            .mouse_move
            .raise_from(self.clone(), MouseEventArgs::at(x, y));
    }
}

impl fmt::Debug for FakeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeForm")
            .field("title", &self.inner.title)
            .finish_non_exhaustive()
    }
}

struct TextBoxInner {
    text: Mutex<String>,
    text_changed: TextChangedEvent,
}

/// A text box whose content tests set programmatically.
///
/// Every [`set_text`](Self::set_text) raises `text_changed`, even when the
/// text is unchanged, so duplicate suppression is left to the stream.
#[derive(Clone)]
pub struct FakeTextBox {
    inner: Arc<TextBoxInner>,
}

impl FakeTextBox {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TextBoxInner {
                text: Mutex::new(String::new()),
                text_changed: EventSource::new(),
            }),
        }
    }

    pub fn text(&self) -> String {
        self.inner.text.lock().clone()
    }

    pub fn text_changed(&self) -> &TextChangedEvent {
        &self.inner.text_changed
    }

    /// Replaces the content and raises `text_changed`.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.inner.text.lock() = text.into();
        self.inner.text_changed.raise_from(self.clone(), ());
    }

    /// Types `text` one character at a time, raising an event per keystroke.
    pub fn type_text(&self, text: &str) {
        for c in text.chars() {
            let mut current = self.text();
            current.push(c);
            self.set_text(current);
        }
    }
}

impl Default for FakeTextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FakeTextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeTextBox")
            .field("text", &*self.inner.text.lock())
            .finish_non_exhaustive()
    }
}
