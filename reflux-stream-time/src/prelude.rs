// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::debounce::DebounceExt;
pub use crate::log_timestamp::TimestampLoggingExt;
pub use crate::timestamp::TimestampExt;

pub use crate::{generate_with_time, try_generate_with_time, InstantTimestamped, LineSink, StdoutSink};
