use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{EventModel, EventStatus};

/// Request payload for creating an event
#[derive(Debug, Deserialize)]
pub struct EventCreateRequest {
    pub name: String,
    pub date: DateTime<Utc>,
    pub course_id: String,
    pub max_players: i32,
    #[serde(default)]
    pub entry_fee_cents: i64,
}

/// Request payload for updating an event; absent fields stay unchanged
#[derive(Debug, Default, Deserialize)]
pub struct EventUpdateRequest {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub max_players: Option<i32>,
    pub entry_fee_cents: Option<i64>,
    pub status: Option<EventStatus>,
}

/// Request payload for joining an event
#[derive(Debug, Deserialize)]
pub struct JoinEventRequest {
    pub player_id: String,
}

/// Response for event endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub course_id: String,
    pub max_players: i32,
    pub entry_fee_cents: i64,
    pub status: EventStatus,
    pub player_ids: Vec<String>,
    pub player_count: i32,
}

impl From<EventModel> for EventResponse {
    fn from(model: EventModel) -> Self {
        let player_count = model.player_count();
        Self {
            id: model.id,
            name: model.name,
            date: model.date,
            course_id: model.course_id,
            max_players: model.max_players,
            entry_fee_cents: model.entry_fee_cents,
            status: model.status,
            player_ids: model.player_ids,
            player_count,
        }
    }
}
