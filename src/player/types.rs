use serde::{Deserialize, Serialize};

/// Request payload for registering a player
#[derive(Debug, Deserialize)]
pub struct PlayerCreateRequest {
    pub name: String,
    pub handicap: Option<f64>,
    pub email: Option<String>,
}

/// Request payload for updating a player.
/// Absent fields are left unchanged; `clear_handicap` removes the handicap.
#[derive(Debug, Default, Deserialize)]
pub struct PlayerUpdateRequest {
    pub name: Option<String>,
    pub handicap: Option<f64>,
    pub email: Option<String>,
    #[serde(default)]
    pub clear_handicap: bool,
}

/// Response for player endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub handicap: Option<f64>,
    pub email: Option<String>,
}

impl From<crate::player::models::PlayerModel> for PlayerResponse {
    fn from(model: crate::player::models::PlayerModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            handicap: model.handicap,
            email: model.email,
        }
    }
}
