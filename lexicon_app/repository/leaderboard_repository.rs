use lexicon_ranking::models::leaderboard_page::LeaderboardPage;
use lexicon_types::{
    errors::ApplicationError,
    leaderboard::{LeaderboardType, TimeRange},
};

#[async_trait::async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Returns every stored page for a leaderboard, in ascending page order.
    async fn list_pages(
        &self,
        leaderboard_type: LeaderboardType,
        time_range: TimeRange,
    ) -> Result<Vec<LeaderboardPage>, ApplicationError>;

    /// Saves a page (creates if new, replaces its rankings if the
    /// (type, time range, page) slot already exists).
    async fn save(&self, page: &LeaderboardPage) -> Result<(), ApplicationError>;

    /// Deletes the pages of a leaderboard from `first_page` onwards.
    /// Returns how many were removed.
    async fn delete_pages_from(
        &self,
        leaderboard_type: LeaderboardType,
        time_range: TimeRange,
        first_page: u32,
    ) -> Result<u64, ApplicationError>;
}
