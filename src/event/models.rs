use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Lifecycle status of an event. Transitions are admin-driven through
/// event updates; nothing derives them automatically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Open,
    Full,
    InProgress,
    Completed,
}

/// Database model for golf events. `player_ids` preserves registration
/// order, which is the leaderboard tie-break.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventModel {
    pub id: String, // UUID v4 as string
    pub name: String,
    pub date: DateTime<Utc>,
    pub course_id: String,
    pub max_players: i32,
    pub entry_fee_cents: i64,
    pub status: EventStatus,
    pub player_ids: Vec<String>,
}

impl EventModel {
    pub fn new(
        name: String,
        date: DateTime<Utc>,
        course_id: String,
        max_players: i32,
        entry_fee_cents: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            date,
            course_id,
            max_players,
            entry_fee_cents,
            status: EventStatus::default(),
            player_ids: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.player_ids.len() >= self.max_players as usize
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player_ids.iter().any(|id| id == player_id)
    }

    pub fn player_count(&self) -> i32 {
        self.player_ids.len() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_string_round_trip() {
        assert_eq!(EventStatus::InProgress.to_string(), "in_progress");
        assert_eq!(
            EventStatus::from_str("in_progress").unwrap(),
            EventStatus::InProgress
        );
    }

    #[test]
    fn test_new_event_defaults() {
        let event = EventModel::new(
            "Spring Open".to_string(),
            Utc::now(),
            "course-1".to_string(),
            16,
            2500,
        );

        assert_eq!(event.status, EventStatus::Upcoming);
        assert!(event.player_ids.is_empty());
        assert!(!event.is_full());
    }

    #[test]
    fn test_capacity() {
        let mut event = EventModel::new(
            "Tiny".to_string(),
            Utc::now(),
            "course-1".to_string(),
            2,
            0,
        );
        event.player_ids = vec!["a".to_string(), "b".to_string()];

        assert!(event.is_full());
        assert!(event.has_player("a"));
        assert!(!event.has_player("c"));
    }
}
