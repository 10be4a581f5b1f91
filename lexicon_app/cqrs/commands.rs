use lexicon_ranking::models::ranking::RankingUser;
use lexicon_types::leaderboard::{LeaderboardType, TimeRange};

use crate::cqrs::Command;

/// Recomputes `user`'s standing in a leaderboard after a contribution.
/// An empty `time_ranges` means every time range.
#[derive(Debug, Clone)]
pub struct RecomputeLeaderboard {
    pub user: RankingUser,
    pub leaderboard_type: LeaderboardType,
    pub time_ranges: Vec<TimeRange>,
}

impl Command for RecomputeLeaderboard {}
