use std::sync::Arc;

use lexicon_types::{Result, errors::AppError, leaderboard::TimeRange};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RecomputeLeaderboard},
    helpers::recompute_leaderboard,
    uow::UnitOfWork,
};

pub struct RecomputeLeaderboardCommandHandler {}

impl Default for RecomputeLeaderboardCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RecomputeLeaderboardCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RecomputeLeaderboard> for RecomputeLeaderboardCommandHandler {
    async fn handle(
        &self,
        command: RecomputeLeaderboard,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<()> {
        if command.user.uid.trim().is_empty() {
            return Err(AppError::MissingUserId.into());
        }

        let time_ranges = if command.time_ranges.is_empty() {
            TimeRange::ALL.to_vec()
        } else {
            command.time_ranges
        };

        for time_range in time_ranges {
            recompute_leaderboard(
                uow,
                config,
                &command.user,
                command.leaderboard_type,
                time_range,
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lexicon_ranking::{
        models::example_suggestion::Pronunciation,
        test_utils::{ExampleSuggestionFactoryOptions, example_suggestion_factory, user_factory},
    };
    use lexicon_types::{
        Result,
        errors::{AppError, ApplicationError},
        leaderboard::{LeaderboardType, TimeRange},
    };

    use super::*;
    use crate::{cqrs::commands::RecomputeLeaderboard, test_utils::tests::MockUnitOfWork};

    #[tokio::test]
    async fn test_recompute_leaderboard_handler_updates_every_time_range() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());
        let handler = RecomputeLeaderboardCommandHandler::new();

        let suggestion = example_suggestion_factory(ExampleSuggestionFactoryOptions {
            pronunciations: Some(vec![Pronunciation {
                speaker: "speaker".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        });
        mock_uow.example_suggestions().save(&suggestion).await?;

        let command = RecomputeLeaderboard {
            user: user_factory("speaker"),
            leaderboard_type: LeaderboardType::RecordExampleAudio,
            time_ranges: vec![],
        };
        handler.handle(command, &mock_uow, &config).await?;

        for time_range in [TimeRange::AllTime, TimeRange::Week, TimeRange::Month] {
            let pages = mock_uow
                .leaderboards()
                .list_pages(LeaderboardType::RecordExampleAudio, time_range)
                .await?;
            assert_eq!(pages.len(), 1);
            assert_eq!(pages[0].rankings[0].count, 1);
        }

        // the suggestion was made today, outside the promotional window
        let voice_athon = mock_uow
            .leaderboards()
            .list_pages(LeaderboardType::RecordExampleAudio, TimeRange::IgboVoiceAthon)
            .await?;
        assert_eq!(voice_athon[0].rankings[0].count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_recompute_leaderboard_handler_only_requested_ranges() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());
        let handler = RecomputeLeaderboardCommandHandler::new();

        let command = RecomputeLeaderboard {
            user: user_factory("reviewer"),
            leaderboard_type: LeaderboardType::VerifyExampleAudio,
            time_ranges: vec![TimeRange::Month],
        };
        handler.handle(command, &mock_uow, &config).await?;

        let month = mock_uow
            .leaderboards()
            .list_pages(LeaderboardType::VerifyExampleAudio, TimeRange::Month)
            .await?;
        let all_time = mock_uow
            .leaderboards()
            .list_pages(LeaderboardType::VerifyExampleAudio, TimeRange::AllTime)
            .await?;
        assert_eq!(month.len(), 1);
        assert!(all_time.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_recompute_leaderboard_handler_requires_uid() {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());
        let handler = RecomputeLeaderboardCommandHandler::new();

        let command = RecomputeLeaderboard {
            user: user_factory(" "),
            leaderboard_type: LeaderboardType::RecordExampleAudio,
            time_ranges: vec![],
        };
        let result = handler.handle(command, &mock_uow, &config).await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::MissingUserId))
        ));
    }
}
