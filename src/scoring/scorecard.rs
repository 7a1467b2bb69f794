//! Scorecard aggregation: per-player front-nine, back-nine and round totals
//! over a sparse set of hole scores.

use std::collections::HashMap;

use super::models::ScoreModel;
use crate::course::models::HoleModel;
use crate::player::models::PlayerModel;

/// Per-player sums keyed by player id. The `total` map is recomputed from
/// `front + back`, so `total == front + back` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardTotals {
    pub front: HashMap<String, u32>,
    pub back: HashMap<String, u32>,
    pub total: HashMap<String, u32>,
}

impl ScorecardTotals {
    pub fn front_for(&self, player_id: &str) -> u32 {
        self.front.get(player_id).copied().unwrap_or(0)
    }

    pub fn back_for(&self, player_id: &str) -> u32 {
        self.back.get(player_id).copied().unwrap_or(0)
    }

    pub fn total_for(&self, player_id: &str) -> u32 {
        self.total.get(player_id).copied().unwrap_or(0)
    }
}

/// Sums net scores (gross where net is unset) per player across the front
/// and back nines. Holes with no recorded score contribute 0; a player with
/// no scores at all gets an all-zero row rather than being dropped.
/// Scores referencing holes or players outside the given sets are ignored.
pub fn aggregate(
    holes: &[HoleModel],
    scores: &[ScoreModel],
    players: &[PlayerModel],
) -> ScorecardTotals {
    let front_hole_ids: HashMap<&str, bool> = holes
        .iter()
        .map(|h| (h.id.as_str(), h.is_front_nine()))
        .collect();

    let mut front: HashMap<String, u32> = HashMap::new();
    let mut back: HashMap<String, u32> = HashMap::new();
    for player in players {
        front.insert(player.id.clone(), 0);
        back.insert(player.id.clone(), 0);
    }

    for score in scores {
        let Some(&is_front) = front_hole_ids.get(score.hole_id.as_str()) else {
            continue;
        };
        let bucket = if is_front { &mut front } else { &mut back };
        let Some(sum) = bucket.get_mut(score.player_id.as_str()) else {
            continue;
        };
        *sum += score.effective_net() as u32;
    }

    let total: HashMap<String, u32> = front
        .iter()
        .map(|(player_id, &f)| (player_id.clone(), f + back.get(player_id).copied().unwrap_or(0)))
        .collect();

    ScorecardTotals { front, back, total }
}
