// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scheduling facility shared by the time-based operators.
//!
//! - [`Scheduler`] is the injected time source: `now()` plus one-shot timers
//! - [`VirtualScheduler`] runs timers against a simulated clock for tests
//! - [`TokioScheduler`] (feature `runtime-tokio`) runs them on a tokio runtime

pub mod impls;
pub mod scheduler;

pub use impls::virtual_time::{VirtualInstant, VirtualScheduler};
pub use scheduler::{Scheduler, Task};

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioScheduler;
