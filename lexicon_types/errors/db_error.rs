use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0} must be set")]
    MissingDatabaseUrl(&'static str),

    #[error("Invalid leaderboard row: {0}")]
    InvalidLeaderboardRow(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
