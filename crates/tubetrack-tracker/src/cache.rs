// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory stats cache keyed by calendar day.
//!
//! Holds at most one entry: the provider stats fetched for the current day.
//! Staleness is lazy -- an entry for a past day is simply ignored on read
//! and replaced on the next fill, so there is no eviction task.

use chrono::NaiveDate;
use tokio::sync::RwLock;

use tubetrack_core::types::ChannelStats;

struct CacheEntry {
    day: NaiveDate,
    stats: Vec<ChannelStats>,
}

/// Single-slot cache of provider stats for one calendar day.
///
/// Only volatile provider stats are cached; user metadata is always read
/// fresh from the store so note edits show up immediately.
#[derive(Default)]
pub struct DailyCache {
    entry: RwLock<Option<CacheEntry>>,
}

impl DailyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats cached for `day`, or `None` if empty or held for another day.
    pub async fn get(&self, day: NaiveDate) -> Option<Vec<ChannelStats>> {
        let guard = self.entry.read().await;
        match guard.as_ref() {
            Some(entry) if entry.day == day => Some(entry.stats.clone()),
            _ => None,
        }
    }

    /// Replace the cached entry wholesale.
    pub async fn put(&self, day: NaiveDate, stats: Vec<ChannelStats>) {
        let mut guard = self.entry.write().await;
        *guard = Some(CacheEntry { day, stats });
    }

    /// Drop the cached entry so the next read refetches.
    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stats(id: &str) -> ChannelStats {
        ChannelStats {
            channel_id: id.into(),
            title: "t".into(),
            thumbnail: String::new(),
            subscriber_count: 1,
            video_count: 2,
            view_count: 3,
        }
    }

    #[tokio::test]
    async fn hit_requires_matching_day() {
        let cache = DailyCache::new();
        assert!(cache.get(day("2026-08-30")).await.is_none());

        cache.put(day("2026-08-30"), vec![stats("UC1")]).await;
        assert_eq!(cache.get(day("2026-08-30")).await.unwrap().len(), 1);

        // An entry for yesterday does not serve today.
        assert!(cache.get(day("2026-08-31")).await.is_none());
    }

    #[tokio::test]
    async fn put_replaces_and_invalidate_clears() {
        let cache = DailyCache::new();
        cache.put(day("2026-08-30"), vec![stats("UC1")]).await;
        cache
            .put(day("2026-08-31"), vec![stats("UC2"), stats("UC3")])
            .await;

        assert!(cache.get(day("2026-08-30")).await.is_none());
        assert_eq!(cache.get(day("2026-08-31")).await.unwrap().len(), 2);

        cache.invalidate().await;
        assert!(cache.get(day("2026-08-31")).await.is_none());
    }
}
