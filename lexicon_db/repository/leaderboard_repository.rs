use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use lexicon_app::repository::LeaderboardRepository;
use lexicon_ranking::models::leaderboard_page::LeaderboardPage;
use lexicon_types::{
    errors::{ApplicationError, DbError},
    leaderboard::{LeaderboardType, TimeRange},
};

use crate::models::{self as db_models};

/// Implements LeaderboardRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresLeaderboardRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresLeaderboardRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> LeaderboardRepository for PostgresLeaderboardRepository<'a> {
    async fn list_pages(
        &self,
        leaderboard_type: LeaderboardType,
        time_range: TimeRange,
    ) -> Result<Vec<LeaderboardPage>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows = sqlx::query_as::<_, db_models::Leaderboard>(
            r#"
            SELECT id, leaderboard_type, time_range, page, rankings, updated_at
            FROM leaderboards
            WHERE leaderboard_type = $1 AND time_range = $2
            ORDER BY page ASC
            "#,
        )
        .bind(leaderboard_type.as_str())
        .bind(time_range.as_str())
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let pages = rows
            .into_iter()
            .map(LeaderboardPage::try_from)
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(pages)
    }

    async fn save(&self, page: &LeaderboardPage) -> Result<(), ApplicationError> {
        let rankings = serde_json::to_value(&page.rankings)?;
        let page_index = i32::try_from(page.page).map_err(|_| {
            DbError::InvalidLeaderboardRow(format!("page index {} out of range", page.page))
        })?;
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO leaderboards (id, leaderboard_type, time_range, page, rankings, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (leaderboard_type, time_range, page) DO UPDATE
            SET
                rankings = EXCLUDED.rankings,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(page.id)
        .bind(page.leaderboard_type.as_str())
        .bind(page.time_range.as_str())
        .bind(page_index)
        .bind(rankings)
        .bind(page.updated_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        tracing::debug!(
            "Saved {} {} leaderboard page {} ({} rankings)",
            page.leaderboard_type,
            page.time_range,
            page.page,
            page.rankings.len()
        );

        Ok(())
    }

    async fn delete_pages_from(
        &self,
        leaderboard_type: LeaderboardType,
        time_range: TimeRange,
        first_page: u32,
    ) -> Result<u64, ApplicationError> {
        let first_page = i32::try_from(first_page).unwrap_or(i32::MAX);
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query(
            r#"
            DELETE FROM leaderboards
            WHERE leaderboard_type = $1 AND time_range = $2 AND page >= $3
            "#,
        )
        .bind(leaderboard_type.as_str())
        .bind(time_range.as_str())
        .bind(first_page)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected())
    }
}
