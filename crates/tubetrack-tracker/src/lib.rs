// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracking logic for the tubetrack channel tracker.
//!
//! Ties together the provider, the stores, and the clock: a calendar-day
//! stats cache, a delta engine computing day-over-day growth, and the
//! channel registry that the HTTP surface calls into.

pub mod cache;
pub mod registry;
pub mod summary;

pub use cache::DailyCache;
pub use registry::ChannelRegistry;
pub use summary::SummaryEngine;
