use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database model for players
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String, // UUID v4 as string
    pub name: String,
    pub handicap: Option<f64>, // Course handicap; None means no allowance
    pub email: Option<String>,
}

impl PlayerModel {
    pub fn new(name: String, handicap: Option<f64>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            handicap,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = PlayerModel::new("alice".to_string(), Some(9.4), None);
        assert!(!player.id.is_empty());
        assert_eq!(player.name, "alice");
        assert_eq!(player.handicap, Some(9.4));
        assert!(player.email.is_none());
    }
}
