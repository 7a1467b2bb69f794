use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database model for per-hole scores. At most one row exists per
/// (event_id, player_id, hole_id); `net` and `skin_won` are derived from
/// the gross score and the sibling scores on the hole, rewritten on every
/// mutation and never authored directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreModel {
    pub id: String, // UUID v4 as string
    pub event_id: String,
    pub player_id: String,
    pub hole_id: String,
    pub gross: u8,
    pub net: Option<u8>,
    pub skin_won: bool,
    pub updated_at: DateTime<Utc>,
}

impl ScoreModel {
    pub fn new(
        event_id: String,
        player_id: String,
        hole_id: String,
        gross: u8,
        net: Option<u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            player_id,
            hole_id,
            gross,
            net,
            skin_won: false,
            updated_at: Utc::now(),
        }
    }

    /// The score used everywhere a net value is needed: falls back to the
    /// gross score when the net has not been derived yet.
    pub fn effective_net(&self) -> u8 {
        self.net.unwrap_or(self.gross)
    }
}
