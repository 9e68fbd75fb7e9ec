//! Diamond candidates.
//!
//! Every positioned diamond with positive points and a finite path becomes a
//! candidate scored `-distance + points_weight * points`.

use super::{Candidate, CandidateKind};
use crate::providers::ai::AiContext;

/// Scores every diamond on the board, in board order.
pub fn candidates<'a>(ctx: &AiContext<'a>) -> Vec<Candidate<'a>> {
    let weight = ctx.config.diamond_points_weight;

    ctx.board
        .diamonds()
        .filter_map(|diamond| {
            let points = diamond.points();
            if points == 0 {
                return None;
            }

            let path = ctx.path_to(diamond.position);
            let distance = path.distance.value()?;

            Some(Candidate {
                target: diamond,
                kind: CandidateKind::Diamond,
                distance: path.distance,
                points,
                score: -f64::from(distance) + weight * f64::from(points),
                teleporter_entry: path.entry,
            })
        })
        .collect()
}
