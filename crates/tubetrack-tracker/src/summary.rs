// SPDX-FileCopyrightText: 2026 Tubetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Day-over-day growth aggregation across all tracked channels.

use std::sync::Arc;

use chrono::NaiveDate;

use tubetrack_core::traits::SnapshotStore;
use tubetrack_core::types::DailySummary;
use tubetrack_core::TubetrackError;

/// Computes aggregate new-video and new-view counts for a day by diffing
/// that day's snapshots against the previous day's.
pub struct SummaryEngine {
    snapshots: Arc<dyn SnapshotStore>,
}

impl SummaryEngine {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { snapshots }
    }

    /// Summarize growth for `day`.
    ///
    /// Per channel, the delta is today's count minus yesterday's, clamped at
    /// zero so a shrinking counter (deleted videos, corrected view totals)
    /// never produces negative growth. A channel with no snapshot for the
    /// previous day contributes its full counts (first-seen policy). A day
    /// with no snapshots at all yields the zero summary.
    pub async fn daily_summary(&self, day: NaiveDate) -> Result<DailySummary, TubetrackError> {
        let today = self.snapshots.list_by_day(day).await?;
        if today.is_empty() {
            return Ok(DailySummary::empty(day));
        }

        let mut summary = DailySummary::empty(day);
        for snapshot in &today {
            let previous = match day.pred_opt() {
                Some(yesterday) => {
                    self.snapshots
                        .get_snapshot(&snapshot.channel_id, yesterday)
                        .await?
                }
                None => None,
            };
            match previous {
                Some(prev) => {
                    summary.new_videos += snapshot.video_count.saturating_sub(prev.video_count);
                    summary.new_views += snapshot.view_count.saturating_sub(prev.view_count);
                }
                None => {
                    summary.new_videos += snapshot.video_count;
                    summary.new_views += snapshot.view_count;
                }
            }
        }
        Ok(summary)
    }
}
