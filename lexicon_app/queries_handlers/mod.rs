mod get_leaderboard;

pub use get_leaderboard::GetLeaderboardHandler;
