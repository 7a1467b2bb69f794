use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::GroupModel;

/// Request payload for creating a group
#[derive(Debug, Deserialize)]
pub struct GroupCreateRequest {
    pub event_id: String,
    pub group_number: i32,
    pub tee_time: DateTime<Utc>,
    #[serde(default)]
    pub player_ids: Vec<String>,
}

/// Request payload for updating a group; absent fields stay unchanged
#[derive(Debug, Default, Deserialize)]
pub struct GroupUpdateRequest {
    pub tee_time: Option<DateTime<Utc>>,
    pub player_ids: Option<Vec<String>>,
}

/// Response for group endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub event_id: String,
    pub group_number: i32,
    pub tee_time: DateTime<Utc>,
    pub player_ids: Vec<String>,
    pub locked: bool,
}

impl From<GroupModel> for GroupResponse {
    fn from(model: GroupModel) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            group_number: model.group_number,
            tee_time: model.tee_time,
            player_ids: model.player_ids,
            locked: model.locked,
        }
    }
}
