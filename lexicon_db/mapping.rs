use lexicon_ranking::models::{
    example_suggestion::ExampleSuggestion, leaderboard_page::LeaderboardPage,
};
use lexicon_types::errors::DbError;

use crate::models::{self as db_models};

impl TryFrom<db_models::Leaderboard> for LeaderboardPage {
    type Error = DbError;

    fn try_from(row: db_models::Leaderboard) -> Result<Self, Self::Error> {
        let leaderboard_type = row
            .leaderboard_type
            .parse()
            .map_err(|e| DbError::InvalidLeaderboardRow(format!("{e}")))?;
        let time_range = row
            .time_range
            .parse()
            .map_err(|e| DbError::InvalidLeaderboardRow(format!("{e}")))?;
        let page = u32::try_from(row.page)
            .map_err(|_| DbError::InvalidLeaderboardRow(format!("negative page {}", row.page)))?;

        Ok(LeaderboardPage {
            id: row.id,
            leaderboard_type,
            time_range,
            page,
            rankings: serde_json::from_value(row.rankings)?,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<db_models::ExampleSuggestion> for ExampleSuggestion {
    type Error = DbError;

    fn try_from(row: db_models::ExampleSuggestion) -> Result<Self, Self::Error> {
        Ok(ExampleSuggestion {
            id: row.id,
            igbo: row.igbo,
            translations: serde_json::from_value(row.translations)?,
            pronunciations: serde_json::from_value(row.pronunciations)?,
            user_interactions: row.user_interactions,
            updated_at: row.updated_at,
        })
    }
}
