use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::models::GroupModel;
use crate::shared::AppError;

/// Trait for group repository operations. `toggle_lock` is the single
/// mutation point for the scorecard lock gate and must flip the flag
/// atomically with respect to concurrent reads.
#[async_trait]
pub trait GroupRepository {
    async fn create_group(&self, group: &GroupModel) -> Result<(), AppError>;
    async fn get_group(&self, group_id: &str) -> Result<Option<GroupModel>, AppError>;
    async fn groups_for_event(&self, event_id: &str) -> Result<Vec<GroupModel>, AppError>;
    async fn update_group(&self, group: &GroupModel) -> Result<(), AppError>;
    async fn delete_group(&self, group_id: &str) -> Result<(), AppError>;

    /// Atomically flips the lock flag and returns the updated group
    async fn toggle_lock(&self, group_id: &str) -> Result<GroupModel, AppError>;
}

/// In-memory implementation of GroupRepository for development and testing
pub struct InMemoryGroupRepository {
    groups: Mutex<HashMap<String, GroupModel>>,
}

impl Default for InMemoryGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGroupRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            groups: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    #[instrument(skip(self, group))]
    async fn create_group(&self, group: &GroupModel) -> Result<(), AppError> {
        debug!(group_id = %group.id, event_id = %group.event_id, group_number = group.group_number, "Creating group in memory");

        let mut groups = self.groups.lock().unwrap();
        if groups.contains_key(&group.id) {
            warn!(group_id = %group.id, "Group already exists in memory");
            return Err(AppError::Conflict("Group already exists".to_string()));
        }
        // (event_id, group_number) mirrors the store's compound uniqueness constraint
        if groups
            .values()
            .any(|g| g.event_id == group.event_id && g.group_number == group.group_number)
        {
            warn!(
                event_id = %group.event_id,
                group_number = group.group_number,
                "Group number already taken for event"
            );
            return Err(AppError::Conflict(format!(
                "Group number {} already exists for this event",
                group.group_number
            )));
        }
        groups.insert(group.id.clone(), group.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_group(&self, group_id: &str) -> Result<Option<GroupModel>, AppError> {
        let groups = self.groups.lock().unwrap();
        Ok(groups.get(group_id).cloned())
    }

    #[instrument(skip(self))]
    async fn groups_for_event(&self, event_id: &str) -> Result<Vec<GroupModel>, AppError> {
        let groups = self.groups.lock().unwrap();
        let mut list: Vec<GroupModel> = groups
            .values()
            .filter(|g| g.event_id == event_id)
            .cloned()
            .collect();
        list.sort_by_key(|g| g.group_number);
        Ok(list)
    }

    #[instrument(skip(self, group))]
    async fn update_group(&self, group: &GroupModel) -> Result<(), AppError> {
        let mut groups = self.groups.lock().unwrap();
        if !groups.contains_key(&group.id) {
            warn!(group_id = %group.id, "Group not found for update in memory");
            return Err(AppError::NotFound("Group not found".to_string()));
        }
        groups.insert(group.id.clone(), group.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_group(&self, group_id: &str) -> Result<(), AppError> {
        let mut groups = self.groups.lock().unwrap();
        if groups.remove(group_id).is_none() {
            warn!(group_id = %group_id, "Group not found for deletion in memory");
            return Err(AppError::NotFound("Group not found".to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_lock(&self, group_id: &str) -> Result<GroupModel, AppError> {
        let mut groups = self.groups.lock().unwrap();

        let group = groups
            .get_mut(group_id)
            .ok_or_else(|| AppError::NotFound("Group not found".to_string()))?;

        group.locked = !group.locked;
        let updated = group.clone();

        info!(
            group_id = %group_id,
            locked = updated.locked,
            "Group lock toggled (atomic)"
        );

        Ok(updated)
    }
}
