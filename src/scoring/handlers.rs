use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::types::{
    LeaderboardResponse, ScorecardResponse, SkinsResponse, SubmitScoreRequest, SubmitScoreResponse,
};
use crate::shared::{AppError, AppState};

/// HTTP handler for submitting or blanking one hole score
///
/// PUT /scores
#[instrument(name = "submit_score", skip(state, request))]
pub async fn submit_score(
    State(state): State<AppState>,
    Json(request): Json<SubmitScoreRequest>,
) -> Result<Json<SubmitScoreResponse>, AppError> {
    let event_id = request.event_id.clone();
    let response = state.score_service.submit_score(request).await?;

    info!(%event_id, cleared = response.cleared, "Score submitted");
    Ok(Json(response))
}

/// HTTP handler for the full event scorecard
///
/// GET /events/:id/scorecard
#[instrument(name = "get_scorecard", skip(state))]
pub async fn get_scorecard(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<ScorecardResponse>, AppError> {
    let scorecard = state.score_service.scorecard(&event_id).await?;

    Ok(Json(scorecard))
}

/// HTTP handler for the ranked leaderboard
///
/// GET /events/:id/leaderboard
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let leaderboard = state.score_service.leaderboard(&event_id).await?;

    Ok(Json(leaderboard))
}

/// HTTP handler for per-hole skin standings
///
/// GET /events/:id/skins
#[instrument(name = "get_skins", skip(state))]
pub async fn get_skins(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<SkinsResponse>, AppError> {
    let skins = state.score_service.skins(&event_id).await?;

    Ok(Json(skins))
}
