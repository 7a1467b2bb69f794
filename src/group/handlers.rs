use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::GroupService,
    types::{GroupCreateRequest, GroupResponse, GroupUpdateRequest},
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> GroupService {
    GroupService::new(
        Arc::clone(&state.group_repository),
        Arc::clone(&state.event_repository),
        Arc::clone(&state.event_locks),
    )
}

/// HTTP handler for creating a tee-time group
///
/// POST /groups (admin)
#[instrument(name = "create_group", skip(state, request))]
pub async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<GroupCreateRequest>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = service(&state).create_group(request).await?;

    info!(group_id = %group.id, "Group created");
    Ok(Json(group))
}

/// HTTP handler for listing an event's groups
///
/// GET /events/:id/groups
#[instrument(name = "list_groups", skip(state))]
pub async fn list_groups(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<GroupResponse>>, AppError> {
    let groups = service(&state).groups_for_event(&event_id).await?;

    Ok(Json(groups))
}

/// HTTP handler for fetching a group
///
/// GET /groups/:id
#[instrument(name = "get_group", skip(state))]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = service(&state).get_group(&group_id).await?;

    Ok(Json(group))
}

/// HTTP handler for updating a group's tee time or membership
///
/// PUT /groups/:id (admin)
#[instrument(name = "update_group", skip(state, request))]
pub async fn update_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(request): Json<GroupUpdateRequest>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = service(&state).update_group(&group_id, request).await?;

    info!(group_id = %group.id, "Group updated");
    Ok(Json(group))
}

/// HTTP handler for deleting a group
///
/// DELETE /groups/:id (admin)
#[instrument(name = "delete_group", skip(state))]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<(), AppError> {
    service(&state).delete_group(&group_id).await?;

    info!(group_id = %group_id, "Group deleted");
    Ok(())
}

/// HTTP handler for flipping the scorecard lock gate
///
/// POST /groups/:id/toggle-lock (admin)
#[instrument(name = "toggle_lock", skip(state))]
pub async fn toggle_lock(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = service(&state).toggle_lock(&group_id).await?;

    info!(group_id = %group.id, locked = group.locked, "Lock toggled");
    Ok(Json(group))
}
