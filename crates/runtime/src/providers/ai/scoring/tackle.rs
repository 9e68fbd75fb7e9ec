//! Tackle candidates.
//!
//! Stepping onto a rival knocks its diamonds loose. That is only worth a move
//! when the rival carries a real haul, we have room to benefit, and the rival
//! is close enough to reach before it wanders off.

use super::{Candidate, CandidateKind};
use crate::providers::ai::AiContext;

/// Scores every rival eligible for a tackle, in board order.
///
/// A rival qualifies when all of these hold:
///
/// - it carries at least `min_diamonds_to_tackle` diamonds (and more than zero)
/// - our own inventory is not full
/// - its path distance is finite, positive and within `max_tackle_distance`
pub fn candidates<'a>(ctx: &AiContext<'a>) -> Vec<Candidate<'a>> {
    let config = ctx.config;
    if ctx.carried() >= ctx.capacity() {
        return Vec::new();
    }

    ctx.rivals()
        .iter()
        .copied()
        .filter_map(|rival| {
            let haul = rival.carried();
            if haul == 0 || haul < config.min_diamonds_to_tackle {
                return None;
            }

            let path = ctx.path_to(rival.position);
            let distance = path.distance.value()?;
            if distance == 0 || distance > config.max_tackle_distance {
                return None;
            }

            Some(Candidate {
                target: rival,
                kind: CandidateKind::Tackle,
                distance: path.distance,
                points: haul,
                score: f64::from(haul) - f64::from(distance) - config.tackle_score_penalty,
                teleporter_entry: path.entry,
            })
        })
        .collect()
}
