#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, AtomicUsize, Ordering},
        },
    };
    use uuid::Uuid;

    use lexicon_ranking::models::{
        example_suggestion::ExampleSuggestion, leaderboard_page::LeaderboardPage,
    };
    use lexicon_types::{
        errors::ApplicationError,
        leaderboard::{LeaderboardType, TimeRange},
    };

    use crate::{
        repository::{ContributionFilter, ExampleSuggestionRepository, LeaderboardRepository},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    type PageKey = (LeaderboardType, TimeRange, u32);

    #[derive(Default, Clone)]
    pub struct MockLeaderboardRepository {
        pages: Arc<Mutex<HashMap<PageKey, LeaderboardPage>>>,
        saves: Arc<AtomicUsize>,
        fail_on_save: bool,
    }

    impl MockLeaderboardRepository {
        pub fn new() -> Self {
            Default::default()
        }

        /// A repository whose writes always fail.
        pub fn failing() -> Self {
            Self {
                fail_on_save: true,
                ..Default::default()
            }
        }

        pub fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LeaderboardRepository for MockLeaderboardRepository {
        async fn list_pages(
            &self,
            leaderboard_type: LeaderboardType,
            time_range: TimeRange,
        ) -> Result<Vec<LeaderboardPage>, ApplicationError> {
            let pages = self.pages.lock().unwrap();
            let mut found: Vec<LeaderboardPage> = pages
                .values()
                .filter(|p| p.leaderboard_type == leaderboard_type && p.time_range == time_range)
                .cloned()
                .collect();
            found.sort_by_key(|p| p.page);

            Ok(found)
        }

        async fn save(&self, page: &LeaderboardPage) -> Result<(), ApplicationError> {
            if self.fail_on_save {
                return Err(ApplicationError::Infrastructure(
                    "leaderboard storage unavailable".to_string(),
                ));
            }

            self.saves.fetch_add(1, Ordering::SeqCst);
            self.pages.lock().unwrap().insert(
                (page.leaderboard_type, page.time_range, page.page),
                page.clone(),
            );
            Ok(())
        }

        async fn delete_pages_from(
            &self,
            leaderboard_type: LeaderboardType,
            time_range: TimeRange,
            first_page: u32,
        ) -> Result<u64, ApplicationError> {
            let mut pages = self.pages.lock().unwrap();
            let before = pages.len();
            pages.retain(|(t, r, page), _| {
                !(*t == leaderboard_type && *r == time_range && *page >= first_page)
            });

            Ok((before - pages.len()) as u64)
        }
    }

    #[derive(Default, Clone)]
    pub struct MockExampleSuggestionRepository {
        suggestions: Arc<Mutex<HashMap<Uuid, ExampleSuggestion>>>,
    }

    #[async_trait]
    impl ExampleSuggestionRepository for MockExampleSuggestionRepository {
        async fn list_contributions(
            &self,
            filter: &ContributionFilter,
        ) -> Result<Vec<ExampleSuggestion>, ApplicationError> {
            let suggestions = self.suggestions.lock().unwrap();
            Ok(suggestions
                .values()
                .filter(|s| filter.matches(s))
                .cloned()
                .collect())
        }

        async fn save(&self, suggestion: &ExampleSuggestion) -> Result<(), ApplicationError> {
            self.suggestions
                .lock()
                .unwrap()
                .insert(suggestion.id, suggestion.clone());
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWork {
        leaderboards: Arc<MockLeaderboardRepository>,
        example_suggestions: Arc<MockExampleSuggestionRepository>,

        // Flags to check if commit/rollback was called
        committed: Arc<AtomicBool>,
        rolled_back: Arc<AtomicBool>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_leaderboards(leaderboards: MockLeaderboardRepository) -> Self {
            Self {
                leaderboards: Arc::new(leaderboards),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn leaderboards(&self) -> Arc<dyn LeaderboardRepository + 'a> {
            self.leaderboards.clone()
        }

        fn example_suggestions(&self) -> Arc<dyn ExampleSuggestionRepository + 'a> {
            self.example_suggestions.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.committed.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.rolled_back.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out units of work that share the same in-memory repositories,
    /// so data written by one command is visible to later queries.
    #[derive(Default)]
    pub struct MockUnitOfWorkProvider {
        uow: MockUnitOfWork,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn committed(&self) -> bool {
            self.uow.committed.load(Ordering::SeqCst)
        }

        pub fn rolled_back(&self) -> bool {
            self.uow.rolled_back.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(self.uow.clone());
            Ok(uow)
        }
    }
}
