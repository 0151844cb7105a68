// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable clock abstraction for fixed-timezone day arithmetic.
//!
//! The cache key and the snapshot key must agree on what "today" means, so
//! day computation lives behind one trait instead of being derived ad hoc at
//! each call site. Tests swap in a manual clock to simulate day rollover
//! without touching the wall clock.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Source of the current instant and the current calendar day in the
/// tracker's fixed timezone.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;

    /// The current calendar day in the configured fixed offset.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation with a configurable fixed UTC offset.
///
/// The original deployment pinned the day boundary to UTC+7 regardless of
/// server locale; that remains the default.
#[derive(Debug, Clone)]
pub struct FixedOffsetClock {
    offset: FixedOffset,
}

/// Default day-boundary offset, in hours east of UTC.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

impl FixedOffsetClock {
    /// Build a clock with the given offset in whole hours east of UTC.
    ///
    /// Offsets outside the valid chrono range (±24h) fall back to UTC+7;
    /// config validation rejects them before this point in normal operation.
    pub fn new(offset_hours: i32) -> Self {
        let offset = FixedOffset::east_opt(offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600).unwrap());
        Self { offset }
    }
}

impl Default for FixedOffsetClock {
    fn default() -> Self {
        Self::new(DEFAULT_UTC_OFFSET_HOURS)
    }
}

impl Clock for FixedOffsetClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}
