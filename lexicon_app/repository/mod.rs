mod example_suggestion_repository;
mod leaderboard_repository;

pub use example_suggestion_repository::{
    ContributionCondition, ContributionFilter, ExampleSuggestionRepository,
};
pub use leaderboard_repository::LeaderboardRepository;
