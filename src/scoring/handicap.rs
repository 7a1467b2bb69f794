//! Handicap stroke allocation and net-score derivation.
//!
//! Standard allocation: with a rounded handicap `h` over an `n`-hole round,
//! every hole gets `h / n` baseline strokes and the `h % n` hardest-ranked
//! holes (rank 1 is hardest) get one extra. For `h <= n` this reduces to a
//! single stroke on each hole ranked at or below `h`.

/// Strokes the player receives on the hole with the given handicap rank.
/// A missing handicap means no allowance anywhere.
pub fn stroke_allowance(handicap: Option<f64>, handicap_rank: u8, holes_in_round: u8) -> u8 {
    let Some(handicap) = handicap else {
        return 0;
    };
    if holes_in_round == 0 {
        return 0;
    }

    let rounded = handicap.round();
    if rounded <= 0.0 {
        return 0;
    }

    let rounded = rounded as u32;
    let holes = holes_in_round as u32;
    let baseline = rounded / holes;
    let remainder = rounded % holes;

    let extra = if (handicap_rank as u32) <= remainder {
        1
    } else {
        0
    };

    (baseline + extra) as u8
}

/// Net score for a hole: gross minus the stroke allowance, never below 1.
/// Pure and deterministic; `None` handicap passes the gross through.
pub fn net_score(gross: u8, handicap: Option<f64>, handicap_rank: u8, holes_in_round: u8) -> u8 {
    let allowance = stroke_allowance(handicap, handicap_rank, holes_in_round);
    gross.saturating_sub(allowance).max(1)
}
