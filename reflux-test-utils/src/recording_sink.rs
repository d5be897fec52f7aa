// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;

/// Captures printed lines in memory.
///
/// [`writer`](Self::writer) hands out a `Fn(&str)` closure, which is the shape
/// line-oriented sinks accept.
#[derive(Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer appending to this sink.
    pub fn writer(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let lines = Arc::clone(&self.lines);
        move |line: &str| lines.lock().push(line.to_owned())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}
