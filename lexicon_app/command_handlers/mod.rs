mod recompute_leaderboard;

pub use recompute_leaderboard::RecomputeLeaderboardCommandHandler;
