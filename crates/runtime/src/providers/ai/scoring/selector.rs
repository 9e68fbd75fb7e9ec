//! Candidate ranking.
//!
//! The [`TargetScorer`] merges diamond and tackle candidates into a single
//! list ordered by score, best first. Diamonds are generated before tackles,
//! and the sort is stable, so equal scores resolve toward diamonds in board
//! order.

use super::{Candidate, diamonds, sort_by_score, tackle};
use crate::providers::ai::AiContext;

/// Ranks every goal the bot could pursue this tick.
///
/// Scoring is pure: the same snapshot and configuration always produce the
/// same ranking.
pub struct TargetScorer;

impl TargetScorer {
    /// Returns every diamond and tackle candidate, best first.
    pub fn rank<'a>(ctx: &AiContext<'a>) -> Vec<Candidate<'a>> {
        let mut ranked = diamonds::candidates(ctx);
        ranked.extend(tackle::candidates(ctx));
        sort_by_score(&mut ranked);

        tracing::debug!("TargetScorer: {} candidates", ranked.len());
        for candidate in ranked.iter().take(3) {
            tracing::debug!(
                "  {:?} {} at {:?}: score={:.2} (dist={}, points={}, via_teleporter={})",
                candidate.kind,
                candidate.target.id,
                candidate.target.position,
                candidate.score,
                candidate.distance,
                candidate.points,
                candidate.teleporter_entry.is_some()
            );
        }

        ranked
    }

    /// The best candidate, if any.
    pub fn select<'a>(ctx: &AiContext<'a>) -> Option<Candidate<'a>> {
        Self::rank(ctx).into_iter().next()
    }
}

/// Free-function form of [`TargetScorer::rank`].
pub fn rank_candidates<'a>(ctx: &AiContext<'a>) -> Vec<Candidate<'a>> {
    TargetScorer::rank(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ai::scoring::CandidateKind;
    use diamonds_core::{Board, BotConfig, GameObject, ObjectId, Position};

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn nearer_diamond_outranks_richer_one() {
        let config = BotConfig::default();
        let me = GameObject::bot(1, pos(0, 0));
        let board = Board::new(10, 10).with_objects([
            me.clone(),
            GameObject::diamond(2, pos(4, 0), 2),
            GameObject::diamond(3, pos(0, 3), 1),
        ]);
        let ctx = AiContext::try_new(&me, &board, &config).expect("bot is placed");

        let ranked = TargetScorer::rank(&ctx);
        assert_eq!(ranked[0].target.id, ObjectId(3));
        assert_eq!(ranked[1].target.id, ObjectId(2));
    }

    #[test]
    fn tackles_rank_below_any_diamond() {
        let config = BotConfig::default();
        let me = GameObject::bot(1, pos(0, 0));
        let board = Board::new(10, 10).with_objects([
            me.clone(),
            GameObject::bot(2, pos(1, 0)).with_diamonds(5),
            GameObject::diamond(3, pos(9, 9), 1),
        ]);
        let ctx = AiContext::try_new(&me, &board, &config).expect("bot is placed");

        let ranked = rank_candidates(&ctx);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].kind, CandidateKind::Diamond);
        assert_eq!(ranked[1].kind, CandidateKind::Tackle);
    }

    #[test]
    fn equal_scores_keep_board_order() {
        let config = BotConfig::default();
        let me = GameObject::bot(1, pos(5, 5));
        let board = Board::new(10, 10).with_objects([
            me.clone(),
            GameObject::diamond(7, pos(5, 8), 1),
            GameObject::diamond(3, pos(2, 5), 1),
        ]);
        let ctx = AiContext::try_new(&me, &board, &config).expect("bot is placed");

        let best = TargetScorer::select(&ctx).expect("two diamonds on the board");
        assert_eq!(best.target.id, ObjectId(7));
    }

    #[test]
    fn empty_board_yields_nothing() {
        let config = BotConfig::default();
        let me = GameObject::bot(1, pos(5, 5));
        let board = Board::new(10, 10).with_object(me.clone());
        let ctx = AiContext::try_new(&me, &board, &config).expect("bot is placed");

        assert!(TargetScorer::select(&ctx).is_none());
    }
}
