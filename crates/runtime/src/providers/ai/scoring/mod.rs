//! Target scoring for the collector bot.
//!
//! Two independent generators produce candidate goals:
//!
//! 1. **Diamonds** ([`diamonds`]): every diamond worth something and reachable
//! 2. **Tackles** ([`tackle`]): rivals carrying a haul, adjacent to us
//!
//! Both speak the same [`Candidate`] record so [`selector::TargetScorer`] can
//! merge and rank them on a single scalar score (higher is better).
//!
//! ## Score Formulas
//!
//! ```text
//! diamond = -distance + points_weight * points
//! tackle  = rival_diamonds - distance - tackle_penalty
//! ```
//!
//! Proximity dominates the diamond score; points only break near-ties. The
//! tackle penalty pushes tackles below every realistic diamond so they only
//! win when nothing else is on offer.

pub mod diamonds;
pub mod selector;
pub mod tackle;

use diamonds_core::{Distance, GameObject, Position};

pub use selector::TargetScorer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Diamond,
    Tackle,
}

/// A scored goal the bot could pursue this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate<'a> {
    /// The diamond or rival bot being targeted.
    pub target: &'a GameObject,

    pub kind: CandidateKind,

    /// Shortest path distance to the target, teleporters included.
    pub distance: Distance,

    /// Diamond value for diamonds, carried diamonds for rivals.
    pub points: u32,

    /// Comparable utility; higher is better.
    pub score: f64,

    /// Teleporter to step into first when the best route uses one.
    pub teleporter_entry: Option<&'a GameObject>,
}

impl<'a> Candidate<'a> {
    pub fn entry_position(&self) -> Option<Position> {
        self.teleporter_entry.and_then(|entry| entry.position)
    }

    /// Cell to walk toward from `here`: the teleporter entry while the route
    /// still needs it, otherwise the target itself.
    pub fn goal_from(&self, here: Position) -> Option<Position> {
        match self.entry_position() {
            Some(entry) if entry != here => Some(entry),
            _ => self.target.position,
        }
    }

    pub fn is_diamond(&self) -> bool {
        self.kind == CandidateKind::Diamond
    }
}

/// Sorts candidates best first. The sort is stable, so equal scores keep
/// their generation order.
pub fn sort_by_score(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
