mod leaderboard_service;

pub use leaderboard_service::{assign_rankings, recompute_leaderboard};
