use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::PlayerService,
    types::{PlayerCreateRequest, PlayerResponse, PlayerUpdateRequest},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for registering a player
///
/// POST /players
#[instrument(name = "create_player", skip(state, request))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<PlayerCreateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.create_player(request).await?;

    info!(player_id = %player.id, "Player created");
    Ok(Json(player))
}

/// HTTP handler for listing all players
///
/// GET /players
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let players = service.list_players().await?;

    Ok(Json(players))
}

/// HTTP handler for fetching a single player
///
/// GET /players/:id
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.get_player(&player_id).await?;

    Ok(Json(player))
}

/// HTTP handler for updating a player
///
/// PUT /players/:id
#[instrument(name = "update_player", skip(state, request))]
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(request): Json<PlayerUpdateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.update_player(&player_id, request).await?;

    info!(player_id = %player.id, "Player updated");
    Ok(Json(player))
}
