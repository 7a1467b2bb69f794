//! Leaderboard ranking: ascending by total net score, stable on ties.

use serde::{Deserialize, Serialize};

/// One participant's aggregated standing. Entries are expected in
/// registration order, which is what tied players fall back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    pub total_net: u32,
    pub holes_played: u32,
}

/// Returns a new list sorted ascending by total net score. The sort is
/// stable, so identical totals keep their input (registration) order and
/// repeated calls produce identical output. Players who have not started
/// sort at their zero total; any other policy belongs to the caller.
pub fn rank(participants: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    let mut ranked = participants.to_vec();
    ranked.sort_by_key(|entry| entry.total_net);
    ranked
}
