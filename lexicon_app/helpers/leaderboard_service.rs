use chrono::Utc;
use futures::future::try_join_all;
use std::collections::HashMap;

use lexicon_ranking::{
    counters::count_contributions,
    models::{
        leaderboard_page::{LeaderboardPage, sort_leaderboards},
        ranking::{Ranking, RankingUser},
    },
    ranking::{sort_rankings, split_rankings},
};
use lexicon_types::{
    Result,
    leaderboard::{LeaderboardType, TimeRange},
};

use crate::{
    config::Config,
    repository::{ContributionFilter, LeaderboardRepository},
    uow::UnitOfWork,
};

/// Maps each ranking group onto the stored page with the same index, creating
/// the missing ones, and persists them all concurrently. Stored pages past the
/// last group are deleted.
/// Returns the saved pages in group order.
pub async fn assign_rankings(
    repo: &(dyn LeaderboardRepository + '_),
    rankings_groups: Vec<Vec<Ranking>>,
    leaderboards: Vec<LeaderboardPage>,
    leaderboard_type: LeaderboardType,
    time_range: TimeRange,
) -> Result<Vec<LeaderboardPage>> {
    let mut existing: HashMap<u32, LeaderboardPage> =
        leaderboards.into_iter().map(|p| (p.page, p)).collect();
    let now = Utc::now();

    let pages: Vec<LeaderboardPage> = rankings_groups
        .into_iter()
        .enumerate()
        .map(|(index, rankings)| {
            let index = index as u32;
            let mut page = existing.remove(&index).unwrap_or_else(|| {
                tracing::debug!(
                    "Creating {leaderboard_type} {time_range} leaderboard page {index}"
                );
                LeaderboardPage::new(leaderboard_type, time_range, index)
            });
            page.rankings = rankings;
            page.updated_at = now;
            page
        })
        .collect();

    try_join_all(pages.iter().map(|page| repo.save(page))).await?;

    if !existing.is_empty() {
        let removed = repo
            .delete_pages_from(leaderboard_type, time_range, pages.len() as u32)
            .await?;
        tracing::debug!(
            "Removed {removed} stale {leaderboard_type} {time_range} leaderboard pages"
        );
    }

    Ok(pages)
}

/// Recomputes `user`'s ranking in one leaderboard and persists the updated pages.
///
/// Nothing is written when the user's ranking can't be computed; the stored
/// pages are returned as they are.
pub async fn recompute_leaderboard(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    config: &Config,
    user: &RankingUser,
    leaderboard_type: LeaderboardType,
    time_range: TimeRange,
) -> Result<Vec<LeaderboardPage>> {
    let leaderboard_repo = uow.leaderboards();
    let suggestion_repo = uow.example_suggestions();

    let filter = ContributionFilter::new(leaderboard_type, time_range, &user.uid, Utc::now());
    let records = suggestion_repo.list_contributions(&filter).await?;

    let mut leaderboards = leaderboard_repo
        .list_pages(leaderboard_type, time_range)
        .await?;
    sort_leaderboards(&mut leaderboards);

    let current: Vec<Ranking> = leaderboards
        .iter()
        .flat_map(|p| p.rankings.iter().cloned())
        .collect();

    let count = count_contributions(leaderboard_type, &records, &user.uid);
    let rankings = sort_rankings(&current, user, i64::from(count));
    if rankings.is_empty() {
        tracing::warn!(
            "Skipping {leaderboard_type} {time_range} leaderboard update: invalid ranking input for uid '{}'",
            user.uid
        );
        return Ok(leaderboards);
    }

    let total = rankings.len();
    let groups = split_rankings(rankings, config.rankings_per_page);
    let pages = assign_rankings(
        leaderboard_repo.as_ref(),
        groups,
        leaderboards,
        leaderboard_type,
        time_range,
    )
    .await?;

    tracing::info!(
        "Updated {leaderboard_type} {time_range} leaderboard for {}: {count} contributions, {total} rankings over {} pages",
        user.uid,
        pages.len()
    );

    Ok(pages)
}
