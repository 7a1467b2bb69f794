use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::leaderboard::LeaderboardEntry;
use super::models::ScoreModel;

/// Request payload for submitting (or blanking) one hole score.
/// `gross: null` / absent means "blank the box" for that hole.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub event_id: String,
    pub group_id: String,
    pub player_id: String,
    pub hole_number: u8,
    pub gross: Option<u8>,
}

/// Response for a score submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitScoreResponse {
    /// True when the request blanked the box
    pub cleared: bool,
    pub score: Option<ScoreResponse>,
    /// Current skin holder on the affected hole after re-evaluation
    pub skin_winner: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub id: String,
    pub event_id: String,
    pub player_id: String,
    pub hole_id: String,
    pub gross: u8,
    pub net: Option<u8>,
    pub skin_won: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<ScoreModel> for ScoreResponse {
    fn from(model: ScoreModel) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            player_id: model.player_id,
            hole_id: model.hole_id,
            gross: model.gross,
            net: model.net,
            skin_won: model.skin_won,
            updated_at: model.updated_at,
        }
    }
}

/// One cell of the scorecard grid
#[derive(Debug, Serialize, Deserialize)]
pub struct HoleScoreCell {
    pub hole_number: u8,
    pub gross: u8,
    pub net: Option<u8>,
    pub skin_won: bool,
}

/// One player's row on the scorecard, holes sorted ascending
#[derive(Debug, Serialize, Deserialize)]
pub struct ScorecardRow {
    pub player_id: String,
    pub player_name: String,
    pub handicap: Option<f64>,
    pub holes: Vec<HoleScoreCell>,
    pub front: u32,
    pub back: u32,
    pub total: u32,
}

/// Column header for one hole on the scorecard
#[derive(Debug, Serialize, Deserialize)]
pub struct HoleHeader {
    pub number: u8,
    pub par: u8,
    pub handicap_rank: u8,
}

/// The full event scorecard: hole headers plus one row per participant in
/// registration order
#[derive(Debug, Serialize, Deserialize)]
pub struct ScorecardResponse {
    pub event_id: String,
    pub holes: Vec<HoleHeader>,
    pub rows: Vec<ScorecardRow>,
}

/// A ranked leaderboard entry with its display position
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedEntry {
    pub position: u32,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub event_id: String,
    pub entries: Vec<RankedEntry>,
}

/// Skin standing for one hole
#[derive(Debug, Serialize, Deserialize)]
pub struct SkinResult {
    pub hole_number: u8,
    pub winner_player_id: Option<String>,
    pub winning_net: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkinsResponse {
    pub event_id: String,
    pub holes: Vec<SkinResult>,
}
