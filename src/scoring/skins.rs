//! Skins evaluation: the sole lowest net score on a hole wins the skin,
//! ties void it.

use super::models::ScoreModel;

/// Determines the skin winner for one hole from every recorded score on it.
/// Returns the winning player id when exactly one player holds the minimum
/// net score, `None` on a tie or an empty hole. Each call re-derives the
/// result from scratch, so it is safe to re-run after any score change on
/// the hole (including re-runs racing submissions elsewhere on the card).
pub fn evaluate_skins(scores_for_hole: &[ScoreModel]) -> Option<String> {
    let min_net = scores_for_hole
        .iter()
        .map(|s| s.effective_net())
        .min()?;

    let mut holders = scores_for_hole
        .iter()
        .filter(|s| s.effective_net() == min_net);

    let first = holders.next()?;
    if holders.next().is_some() {
        // Shared minimum carries no skin
        return None;
    }

    Some(first.player_id.clone())
}
