// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits decoupling the channel registry from concrete backends.

pub mod provider;
pub mod store;

pub use provider::StatsProvider;
pub use store::{ChannelStore, SnapshotStore};
