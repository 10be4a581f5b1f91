use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Leaderboard {
    pub id: Uuid,
    pub leaderboard_type: String,
    pub time_range: String,
    pub page: i32,
    pub rankings: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ExampleSuggestion {
    pub id: Uuid,
    pub igbo: Option<String>,
    pub translations: serde_json::Value,
    pub pronunciations: serde_json::Value,
    pub user_interactions: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
