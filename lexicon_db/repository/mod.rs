mod example_suggestion_repository;
mod leaderboard_repository;

pub use example_suggestion_repository::PostgresExampleSuggestionRepository;
pub use leaderboard_repository::PostgresLeaderboardRepository;
