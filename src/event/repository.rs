use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::models::EventModel;
use crate::shared::AppError;

/// Result of attempting to join an event
#[derive(Debug, Clone)]
pub enum JoinEventResult {
    /// Successfully joined (or was already registered), returns updated event
    Success(EventModel),
    /// Event is at capacity
    EventFull,
    /// Event does not exist
    EventNotFound,
}

/// Trait for event repository operations
#[async_trait]
pub trait EventRepository {
    async fn create_event(&self, event: &EventModel) -> Result<(), AppError>;
    async fn get_event(&self, event_id: &str) -> Result<Option<EventModel>, AppError>;
    async fn list_events(&self) -> Result<Vec<EventModel>, AppError>;
    async fn update_event(&self, event: &EventModel) -> Result<(), AppError>;

    /// Atomically attempts to register a player by checking capacity and
    /// appending to the participant list. Registration order is preserved
    /// because it is the leaderboard tie-break.
    async fn try_join_event(
        &self,
        event_id: &str,
        player_id: &str,
    ) -> Result<JoinEventResult, AppError>;
}

/// In-memory implementation of EventRepository for development and testing
pub struct InMemoryEventRepository {
    events: Mutex<HashMap<String, EventModel>>,
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    #[instrument(skip(self, event))]
    async fn create_event(&self, event: &EventModel) -> Result<(), AppError> {
        debug!(event_id = %event.id, name = %event.name, "Creating event in memory");

        let mut events = self.events.lock().unwrap();
        if events.contains_key(&event.id) {
            warn!(event_id = %event.id, "Event already exists in memory");
            return Err(AppError::Conflict("Event already exists".to_string()));
        }
        events.insert(event.id.clone(), event.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_event(&self, event_id: &str) -> Result<Option<EventModel>, AppError> {
        let events = self.events.lock().unwrap();
        Ok(events.get(event_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_events(&self) -> Result<Vec<EventModel>, AppError> {
        let events = self.events.lock().unwrap();
        let mut list: Vec<EventModel> = events.values().cloned().collect();
        list.sort_by_key(|e| e.date);
        Ok(list)
    }

    #[instrument(skip(self, event))]
    async fn update_event(&self, event: &EventModel) -> Result<(), AppError> {
        let mut events = self.events.lock().unwrap();
        if !events.contains_key(&event.id) {
            warn!(event_id = %event.id, "Event not found for update in memory");
            return Err(AppError::NotFound("Event not found".to_string()));
        }
        events.insert(event.id.clone(), event.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn try_join_event(
        &self,
        event_id: &str,
        player_id: &str,
    ) -> Result<JoinEventResult, AppError> {
        debug!(event_id = %event_id, player_id = %player_id, "Attempting to join event atomically");

        let mut events = self.events.lock().unwrap();

        let event = match events.get_mut(event_id) {
            Some(event) => event,
            None => {
                debug!(event_id = %event_id, "Event not found");
                return Ok(JoinEventResult::EventNotFound);
            }
        };

        // Rejoining is idempotent
        if event.has_player(player_id) {
            debug!(event_id = %event_id, player_id = %player_id, "Player already registered");
            return Ok(JoinEventResult::Success(event.clone()));
        }

        if event.is_full() {
            debug!(event_id = %event_id, current_count = event.player_count(), "Event is full");
            return Ok(JoinEventResult::EventFull);
        }

        event.player_ids.push(player_id.to_string());
        let updated_event = event.clone();

        info!(
            event_id = %event_id,
            player_id = %player_id,
            new_player_count = updated_event.player_count(),
            "Player joined event successfully (atomic)"
        );

        Ok(JoinEventResult::Success(updated_event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_event(max_players: i32) -> EventModel {
        EventModel::new(
            "Spring Open".to_string(),
            Utc::now(),
            "course-1".to_string(),
            max_players,
            2500,
        )
    }

    #[tokio::test]
    async fn test_create_and_get_event() {
        let repo = InMemoryEventRepository::new();
        let event = test_event(16);

        repo.create_event(&event).await.unwrap();

        let retrieved = repo.get_event(&event.id).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "Spring Open");
        assert_eq!(retrieved.max_players, 16);
    }

    #[tokio::test]
    async fn test_join_preserves_registration_order() {
        let repo = InMemoryEventRepository::new();
        let event = test_event(4);
        repo.create_event(&event).await.unwrap();

        for player in ["carol", "alice", "bob"] {
            repo.try_join_event(&event.id, player).await.unwrap();
        }

        let updated = repo.get_event(&event.id).await.unwrap().unwrap();
        assert_eq!(updated.player_ids, vec!["carol", "alice", "bob"]);
    }

    #[tokio::test]
    async fn test_join_full_event() {
        let repo = InMemoryEventRepository::new();
        let event = test_event(1);
        repo.create_event(&event).await.unwrap();

        repo.try_join_event(&event.id, "alice").await.unwrap();
        let result = repo.try_join_event(&event.id, "bob").await.unwrap();
        assert!(matches!(result, JoinEventResult::EventFull));
    }

    #[tokio::test]
    async fn test_rejoin_is_idempotent() {
        let repo = InMemoryEventRepository::new();
        let event = test_event(1);
        repo.create_event(&event).await.unwrap();

        repo.try_join_event(&event.id, "alice").await.unwrap();
        // Event is full but alice is already in, so this still succeeds
        let result = repo.try_join_event(&event.id, "alice").await.unwrap();
        match result {
            JoinEventResult::Success(updated) => assert_eq!(updated.player_ids.len(), 1),
            other => panic!("Expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_join_missing_event() {
        let repo = InMemoryEventRepository::new();
        let result = repo.try_join_event("missing", "alice").await.unwrap();
        assert!(matches!(result, JoinEventResult::EventNotFound));
    }

    #[tokio::test]
    async fn test_list_events_sorted_by_date() {
        let repo = InMemoryEventRepository::new();
        let mut early = test_event(4);
        early.date = Utc::now() - chrono::Duration::days(7);
        let late = test_event(4);

        repo.create_event(&late).await.unwrap();
        repo.create_event(&early).await.unwrap();

        let events = repo.list_events().await.unwrap();
        assert_eq!(events[0].id, early.id);
    }
}
