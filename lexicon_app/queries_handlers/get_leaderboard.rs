use async_trait::async_trait;
use std::sync::Arc;

use lexicon_ranking::models::{
    leaderboard_page::sort_leaderboards,
    ranking::Ranking,
};
use lexicon_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{GetLeaderboard, LeaderboardView},
    },
    uow::UnitOfWork,
};

pub struct GetLeaderboardHandler {}

impl GetLeaderboardHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetLeaderboard> for GetLeaderboardHandler {
    async fn handle(
        &self,
        query: GetLeaderboard,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<<GetLeaderboard as Query>::Output, ApplicationError> {
        let repo = uow.leaderboards();

        // Clamp to sensible defaults to avoid invalid offsets.
        let page = query.page.max(1);
        let per_page = query.per_page.clamp(1, config.max_per_page.max(1));
        let offset = (page as usize - 1) * per_page as usize;

        let mut leaderboards = repo
            .list_pages(query.leaderboard_type, query.time_range)
            .await?;
        sort_leaderboards(&mut leaderboards);

        let all: Vec<Ranking> = leaderboards
            .into_iter()
            .flat_map(|p| p.rankings)
            .collect();

        let user_ranking = query
            .uid
            .as_deref()
            .and_then(|uid| all.iter().find(|r| r.uid == uid).cloned());

        Ok(LeaderboardView {
            total_rankings: all.len(),
            rankings: all.into_iter().skip(offset).take(per_page as usize).collect(),
            user_ranking,
            page,
            per_page,
        })
    }
}
