use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown leaderboard type '{0}'")]
    UnknownLeaderboardType(String),

    #[error("Unknown time range '{0}'")]
    UnknownTimeRange(String),

    #[error("A user id is required to update leaderboards")]
    MissingUserId,
}
