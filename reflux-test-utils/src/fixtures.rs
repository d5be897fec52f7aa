// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// A screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X={},Y={}}}", self.x, self.y)
    }
}

/// Payload of a mouse-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEventArgs {
    pub location: Point,
}

impl MouseEventArgs {
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            location: Point::new(x, y),
        }
    }
}
