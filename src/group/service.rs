use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::GroupModel,
    repository::GroupRepository,
    types::{GroupCreateRequest, GroupResponse, GroupUpdateRequest},
};
use crate::event::repository::EventRepository;
use crate::shared::{AppError, EventLockRegistry};

/// Service for handling group business logic, including the lock gate
pub struct GroupService {
    repository: Arc<dyn GroupRepository + Send + Sync>,
    event_repository: Arc<dyn EventRepository + Send + Sync>,
    event_locks: Arc<EventLockRegistry>,
}

impl GroupService {
    pub fn new(
        repository: Arc<dyn GroupRepository + Send + Sync>,
        event_repository: Arc<dyn EventRepository + Send + Sync>,
        event_locks: Arc<EventLockRegistry>,
    ) -> Self {
        Self {
            repository,
            event_repository,
            event_locks,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_group(
        &self,
        request: GroupCreateRequest,
    ) -> Result<GroupResponse, AppError> {
        if request.group_number < 1 {
            return Err(AppError::Validation(
                "Group number must be at least 1".to_string(),
            ));
        }

        let event = self
            .event_repository
            .get_event(&request.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        // Group members must be registered for the event
        for player_id in &request.player_ids {
            if !event.has_player(player_id) {
                return Err(AppError::Validation(format!(
                    "Player {} is not registered for this event",
                    player_id
                )));
            }
        }

        let group = GroupModel::new(
            request.event_id,
            request.group_number,
            request.tee_time,
            request.player_ids,
        );
        self.repository.create_group(&group).await?;

        info!(group_id = %group.id, group_number = group.group_number, "Group created successfully");
        Ok(group.into())
    }

    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: &str) -> Result<GroupResponse, AppError> {
        let group = self
            .repository
            .get_group(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;
        Ok(group.into())
    }

    #[instrument(skip(self))]
    pub async fn groups_for_event(&self, event_id: &str) -> Result<Vec<GroupResponse>, AppError> {
        self.event_repository
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        let groups = self.repository.groups_for_event(event_id).await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn update_group(
        &self,
        group_id: &str,
        request: GroupUpdateRequest,
    ) -> Result<GroupResponse, AppError> {
        let mut group = self
            .repository
            .get_group(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        if let Some(tee_time) = request.tee_time {
            group.tee_time = tee_time;
        }
        if let Some(player_ids) = request.player_ids {
            let event = self
                .event_repository
                .get_event(&group.event_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
            for player_id in &player_ids {
                if !event.has_player(player_id) {
                    return Err(AppError::Validation(format!(
                        "Player {} is not registered for this event",
                        player_id
                    )));
                }
            }
            group.player_ids = player_ids;
        }

        self.repository.update_group(&group).await?;

        info!(group_id = %group.id, "Group updated successfully");
        Ok(group.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_group(&self, group_id: &str) -> Result<(), AppError> {
        self.repository.delete_group(group_id).await?;
        info!(group_id = %group_id, "Group deleted");
        Ok(())
    }

    /// Flips the group's scorecard lock. The flip happens under the event's
    /// write mutex, so a toggle waits out any in-flight score submission for
    /// the event and every submission that starts afterwards observes the
    /// new state. Admin capability is enforced at the route layer.
    #[instrument(skip(self))]
    pub async fn toggle_lock(&self, group_id: &str) -> Result<GroupResponse, AppError> {
        let group = self
            .repository
            .get_group(group_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        let event_lock = self.event_locks.lock_for(&group.event_id).await;
        let _guard = event_lock.lock().await;

        let group = self.repository.toggle_lock(group_id).await?;

        info!(group_id = %group_id, locked = group.locked, "Scorecard lock toggled");
        Ok(group.into())
    }
}
