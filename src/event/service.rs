use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::EventModel,
    repository::{EventRepository, JoinEventResult},
    types::{EventCreateRequest, EventResponse, EventUpdateRequest},
};
use crate::course::repository::CourseRepository;
use crate::player::repository::PlayerRepository;
use crate::shared::AppError;

/// Service for handling event business logic
pub struct EventService {
    repository: Arc<dyn EventRepository + Send + Sync>,
    course_repository: Arc<dyn CourseRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl EventService {
    pub fn new(
        repository: Arc<dyn EventRepository + Send + Sync>,
        course_repository: Arc<dyn CourseRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            course_repository,
            player_repository,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        request: EventCreateRequest,
    ) -> Result<EventResponse, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Event name is required".to_string()));
        }
        if request.max_players < 1 {
            return Err(AppError::Validation(
                "Event capacity must be at least 1".to_string(),
            ));
        }

        // The event must point at an existing course
        self.course_repository
            .get_course(&request.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let event = EventModel::new(
            request.name,
            request.date,
            request.course_id,
            request.max_players,
            request.entry_fee_cents,
        );
        self.repository.create_event(&event).await?;

        info!(event_id = %event.id, name = %event.name, "Event created successfully");
        Ok(event.into())
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, event_id: &str) -> Result<EventResponse, AppError> {
        let event = self
            .repository
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        Ok(event.into())
    }

    #[instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<EventResponse>, AppError> {
        let events = self.repository.list_events().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    /// Applies an admin-driven partial update. Status transitions are taken
    /// as-is; the core never computes them.
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: &str,
        request: EventUpdateRequest,
    ) -> Result<EventResponse, AppError> {
        let mut event = self
            .repository
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("Event name is required".to_string()));
            }
            event.name = name;
        }
        if let Some(date) = request.date {
            event.date = date;
        }
        if let Some(max_players) = request.max_players {
            if max_players < event.player_count() {
                return Err(AppError::Validation(
                    "Capacity cannot drop below current registrations".to_string(),
                ));
            }
            event.max_players = max_players;
        }
        if let Some(entry_fee_cents) = request.entry_fee_cents {
            event.entry_fee_cents = entry_fee_cents;
        }
        if let Some(status) = request.status {
            event.status = status;
        }

        self.repository.update_event(&event).await?;

        info!(event_id = %event.id, status = %event.status, "Event updated successfully");
        Ok(event.into())
    }

    /// Registers a player for the event; capacity is checked atomically
    /// inside the repository.
    #[instrument(skip(self))]
    pub async fn join_event(
        &self,
        event_id: &str,
        player_id: &str,
    ) -> Result<EventResponse, AppError> {
        self.player_repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Player not found".to_string()))?;

        match self.repository.try_join_event(event_id, player_id).await? {
            JoinEventResult::Success(event) => {
                info!(event_id = %event_id, player_id = %player_id, "Player joined event");
                Ok(event.into())
            }
            JoinEventResult::EventFull => {
                Err(AppError::Validation("Event is at capacity".to_string()))
            }
            JoinEventResult::EventNotFound => {
                Err(AppError::NotFound("Event not found".to_string()))
            }
        }
    }
}
