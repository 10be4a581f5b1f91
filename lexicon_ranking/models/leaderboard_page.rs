use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lexicon_types::leaderboard::{LeaderboardType, TimeRange};

use super::ranking::Ranking;

/// A stored shard of the rankings for one (type, time range) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub leaderboard_type: LeaderboardType,
    pub time_range: TimeRange,
    pub page: u32,
    pub rankings: Vec<Ranking>,
    pub updated_at: DateTime<Utc>,
}

impl LeaderboardPage {
    pub fn new(leaderboard_type: LeaderboardType, time_range: TimeRange, page: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            leaderboard_type,
            time_range,
            page,
            rankings: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

/// Sorts pages by ascending page index, in place.
pub fn sort_leaderboards(pages: &mut [LeaderboardPage]) {
    pages.sort_by_key(|p| p.page);
}
