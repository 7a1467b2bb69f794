use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database model for tee-time groups. The `locked` flag is the scorecard
/// lock gate: while set, every score mutation for the group is refused.
/// Groups start unlocked and only an admin toggle flips the flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupModel {
    pub id: String, // UUID v4 as string
    pub event_id: String,
    pub group_number: i32, // Unique per event
    pub tee_time: DateTime<Utc>,
    pub player_ids: Vec<String>,
    pub locked: bool,
}

impl GroupModel {
    pub fn new(
        event_id: String,
        group_number: i32,
        tee_time: DateTime<Utc>,
        player_ids: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            group_number,
            tee_time,
            player_ids,
            locked: false,
        }
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player_ids.iter().any(|id| id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_starts_unlocked() {
        let group = GroupModel::new("event-1".to_string(), 1, Utc::now(), vec![]);
        assert!(!group.locked);
    }

    #[test]
    fn test_has_player() {
        let group = GroupModel::new(
            "event-1".to_string(),
            1,
            Utc::now(),
            vec!["alice".to_string()],
        );
        assert!(group.has_player("alice"));
        assert!(!group.has_player("bob"));
    }
}
