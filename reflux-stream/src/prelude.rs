// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Factories and operator traits in one import.

pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::distinct_until_changed_by::DistinctUntilChangedByExt;
pub use crate::filter::FilterExt;
pub use crate::map::MapExt;
pub use crate::observable_ext::ObservableExt;
pub use crate::tap::{TapActions, TapExt};

pub use crate::{
    empty, from_event, from_event_pattern, generate, just, never, range, throw, try_generate,
    EventHandler, EventPattern, PatternHandler,
};
