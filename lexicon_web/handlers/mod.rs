mod error;
mod leaderboard;

pub use error::ApiError;
pub use leaderboard::{get_leaderboard, recompute_leaderboard};
