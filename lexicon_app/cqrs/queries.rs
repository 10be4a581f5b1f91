use serde::Serialize;

use lexicon_ranking::models::ranking::Ranking;
use lexicon_types::leaderboard::{LeaderboardType, TimeRange};

use crate::cqrs::Query;

/// Fetch a paginated slice of a leaderboard, plus the requesting user's own ranking.
#[derive(Debug, Clone)]
pub struct GetLeaderboard {
    pub leaderboard_type: LeaderboardType,
    pub time_range: TimeRange,
    pub page: u32,
    pub per_page: u32,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    pub rankings: Vec<Ranking>,
    pub user_ranking: Option<Ranking>,
    pub total_rankings: usize,
    pub page: u32,
    pub per_page: u32,
}

impl Query for GetLeaderboard {
    type Output = LeaderboardView;
}
