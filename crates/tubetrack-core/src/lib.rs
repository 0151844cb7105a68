// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the tubetrack channel tracker.
//!
//! This crate provides the error taxonomy, domain types, the clock
//! abstraction used for fixed-timezone day arithmetic, the channel URL
//! extractor, and the adapter traits implemented by the provider and
//! storage crates.

pub mod clock;
pub mod error;
pub mod extract;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use clock::{Clock, FixedOffsetClock};
pub use error::TubetrackError;
pub use extract::extract_channel_ref;
pub use types::{
    ChannelRecord, ChannelRef, ChannelStats, ComposedChannel, DailySummary, MetadataPatch,
    StatsSnapshot,
};

// Re-export adapter traits at crate root.
pub use traits::{ChannelStore, SnapshotStore, StatsProvider};
