pub mod example_suggestion;
pub mod leaderboard_page;
pub mod ranking;
