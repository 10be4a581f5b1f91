use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use lexicon_app::repository::{
    ContributionCondition, ContributionFilter, ExampleSuggestionRepository,
};
use lexicon_ranking::models::example_suggestion::ExampleSuggestion;
use lexicon_types::errors::{ApplicationError, DbError};

use crate::models::{self as db_models};

/// Implements ExampleSuggestionRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresExampleSuggestionRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresExampleSuggestionRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

/// SQL predicate for a contribution condition; `$3` is the user id.
fn condition_sql(condition: &ContributionCondition) -> &'static str {
    match condition {
        ContributionCondition::SpokenBy(_) => {
            "pronunciations @> jsonb_build_array(jsonb_build_object('speaker', $3::text))"
        }
        ContributionCondition::ReviewedBy(_) => {
            r#"EXISTS (
                SELECT 1 FROM jsonb_array_elements(pronunciations) AS p
                WHERE COALESCE(p->'approvals', '[]'::jsonb) ? $3
                   OR COALESCE(p->'denials', '[]'::jsonb) ? $3
            )"#
        }
        ContributionCondition::TranslatedBy(_) => "$3 = ANY(user_interactions)",
    }
}

#[async_trait::async_trait]
impl<'a> ExampleSuggestionRepository for PostgresExampleSuggestionRepository<'a> {
    async fn list_contributions(
        &self,
        filter: &ContributionFilter,
    ) -> Result<Vec<ExampleSuggestion>, ApplicationError> {
        let (start, end) = filter.date_range.unzip();
        let sql = format!(
            r#"
            SELECT id, igbo, translations, pronunciations, user_interactions, updated_at
            FROM example_suggestions
            WHERE ($1::timestamptz IS NULL OR updated_at >= $1)
              AND ($2::timestamptz IS NULL OR updated_at <= $2)
              AND {}
            "#,
            condition_sql(&filter.condition)
        );

        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::ExampleSuggestion>(&sql)
            .bind(start)
            .bind(end)
            .bind(filter.condition.uid())
            .fetch_all(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let suggestions = rows
            .into_iter()
            .map(ExampleSuggestion::try_from)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(suggestions)
    }

    async fn save(&self, suggestion: &ExampleSuggestion) -> Result<(), ApplicationError> {
        let translations = serde_json::to_value(&suggestion.translations)?;
        let pronunciations = serde_json::to_value(&suggestion.pronunciations)?;
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO example_suggestions
                (id, igbo, translations, pronunciations, user_interactions, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET
                igbo = $2,
                translations = $3,
                pronunciations = $4,
                user_interactions = $5,
                updated_at = $6
            "#,
        )
        .bind(suggestion.id)
        .bind(&suggestion.igbo)
        .bind(translations)
        .bind(pronunciations)
        .bind(&suggestion.user_interactions)
        .bind(suggestion.updated_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use lexicon_ranking::{
        models::example_suggestion::Pronunciation,
        test_utils::{ExampleSuggestionFactoryOptions, example_suggestion_factory},
    };
    use lexicon_types::leaderboard::{LeaderboardType, TimeRange};

    use super::*;
    use crate::establish_test_connection_pool;

    #[tokio::test]
    #[ignore = "needs TEST_DATABASE_URL"]
    async fn test_list_contributions_by_condition() -> Result<(), ApplicationError> {
        let pool = establish_test_connection_pool().await?;
        // never committed, rolled back on drop
        let tx = pool.begin().await.map_err(DbError::Database)?;
        let repo = PostgresExampleSuggestionRepository::new(Arc::new(Mutex::new(tx)));

        let spoken = example_suggestion_factory(ExampleSuggestionFactoryOptions {
            pronunciations: Some(vec![Pronunciation {
                speaker: "db-speaker".to_string(),
                denials: vec!["db-reviewer".to_string()],
                ..Default::default()
            }]),
            user_interactions: Some(vec!["db-translator".to_string()]),
            ..Default::default()
        });
        repo.save(&spoken).await?;

        for (leaderboard_type, uid) in [
            (LeaderboardType::RecordExampleAudio, "db-speaker"),
            (LeaderboardType::VerifyExampleAudio, "db-reviewer"),
            (LeaderboardType::TranslateIgboSentence, "db-translator"),
        ] {
            let filter = ContributionFilter::new(leaderboard_type, TimeRange::Week, uid, Utc::now());
            let found = repo.list_contributions(&filter).await?;
            assert_eq!(found.len(), 1, "{leaderboard_type}");
            assert_eq!(found[0].id, spoken.id);
        }

        let filter = ContributionFilter::new(
            LeaderboardType::RecordExampleAudio,
            TimeRange::IgboVoiceAthon,
            "db-speaker",
            Utc::now(),
        );
        assert!(repo.list_contributions(&filter).await?.is_empty());

        Ok(())
    }
}
