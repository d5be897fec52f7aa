// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consuming reflux observables from async code.
//!
//! [`IntoStreamExt`] bridges the push-based [`Observable`](reflux_core::Observable)
//! contract into a pull-based [`futures::Stream`], and builds `for_each` /
//! `to_vec` on top of it.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod into_stream;

pub use into_stream::{IntoStreamExt, ObservableStream};
