use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::EventService,
    types::{EventCreateRequest, EventResponse, EventUpdateRequest, JoinEventRequest},
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> EventService {
    EventService::new(
        Arc::clone(&state.event_repository),
        Arc::clone(&state.course_repository),
        Arc::clone(&state.player_repository),
    )
}

/// HTTP handler for creating an event
///
/// POST /events (admin)
#[instrument(name = "create_event", skip(state, request))]
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<EventCreateRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let event = service(&state).create_event(request).await?;

    info!(event_id = %event.id, "Event created");
    Ok(Json(event))
}

/// HTTP handler for listing all events
///
/// GET /events
#[instrument(name = "list_events", skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = service(&state).list_events().await?;

    Ok(Json(events))
}

/// HTTP handler for fetching an event
///
/// GET /events/:id
#[instrument(name = "get_event", skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let event = service(&state).get_event(&event_id).await?;

    Ok(Json(event))
}

/// HTTP handler for updating an event (including admin-driven status moves)
///
/// PUT /events/:id (admin)
#[instrument(name = "update_event", skip(state, request))]
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(request): Json<EventUpdateRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let event = service(&state).update_event(&event_id, request).await?;

    info!(event_id = %event.id, "Event updated");
    Ok(Json(event))
}

/// HTTP handler for registering a player to an event
///
/// POST /events/:id/join
#[instrument(name = "join_event", skip(state, request))]
pub async fn join_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(request): Json<JoinEventRequest>,
) -> Result<Json<EventResponse>, AppError> {
    let event = service(&state)
        .join_event(&event_id, &request.player_id)
        .await?;

    info!(event_id = %event.id, player_id = %request.player_id, "Player joined event");
    Ok(Json(event))
}
