use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use lexicon_app::{
    command_handlers::RecomputeLeaderboardCommandHandler,
    cqrs::{
        commands::RecomputeLeaderboard,
        queries::{GetLeaderboard, LeaderboardView},
    },
    queries_handlers::GetLeaderboardHandler,
};
use lexicon_ranking::models::ranking::RankingUser;
use lexicon_types::leaderboard::{LeaderboardType, TimeRange};

use crate::{handlers::ApiError, http::AppState};

const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub time_range: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub uid: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeLeaderboardRequest {
    pub user: RankingUser,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

/// GET /leaderboards/{leaderboard_type}
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(leaderboard_type): Path<String>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardView>, ApiError> {
    let leaderboard_type: LeaderboardType = leaderboard_type.parse()?;
    let time_range = params
        .time_range
        .as_deref()
        .map(str::parse::<TimeRange>)
        .transpose()?
        .unwrap_or_default();

    let view = state
        .app_bus
        .query(
            GetLeaderboard {
                leaderboard_type,
                time_range,
                page: params.page.unwrap_or(1),
                per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
                uid: params.uid,
            },
            GetLeaderboardHandler::new(),
        )
        .await?;

    Ok(Json(view))
}

/// POST /leaderboards/{leaderboard_type} - Recompute the user's rankings
pub async fn recompute_leaderboard(
    State(state): State<AppState>,
    Path(leaderboard_type): Path<String>,
    Json(request): Json<RecomputeLeaderboardRequest>,
) -> Result<StatusCode, ApiError> {
    let leaderboard_type: LeaderboardType = leaderboard_type.parse()?;

    state
        .app_bus
        .execute(
            RecomputeLeaderboard {
                user: request.user,
                leaderboard_type,
                time_ranges: request.time_ranges,
            },
            RecomputeLeaderboardCommandHandler::new(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
