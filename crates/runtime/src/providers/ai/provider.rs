//! The collector bot's per-tick decision engine.

use diamonds_core::{Board, BotConfig, GameObject, Move, ObjectId, Position};

use super::context::AvoidSet;
use super::direction::select_direction;
use super::goal::{Decision, DecisionReason};
use super::return_policy::ReturnPolicy;
use super::scoring::{CandidateKind, TargetScorer};
use super::shuffle::{MoveShuffler, RandomShuffler};
use crate::api::{MoveProvider, Result, RuntimeError};
use crate::providers::ai::AiContext;

/// Diamond-collecting bot.
///
/// Each tick runs the same pipeline:
///
/// 1. Rank every diamond and tackle candidate ([`TargetScorer`])
/// 2. Let the [`ReturnPolicy`] override everything when the bot must go home
/// 3. Otherwise pursue the best candidate if its score clears the viability
///    floor `-2 * (width + height)`
/// 4. Otherwise walk to the diamond button when diamonds run low
/// 5. Otherwise stay
///
/// The only state kept between ticks is the last goal, exposed through
/// [`CollectorBot::goal`] for observers. Decisions never depend on it.
#[derive(Debug, Clone)]
pub struct CollectorBot<S = RandomShuffler> {
    config: BotConfig,
    shuffler: S,
    goal: Option<Position>,
}

impl CollectorBot<RandomShuffler> {
    /// Bot with entropy-seeded fallback shuffling.
    pub fn new(config: BotConfig) -> Self {
        Self::with_shuffler(config, RandomShuffler::from_entropy())
    }

    /// Bot whose fallback shuffling replays identically for the same seed.
    pub fn seeded(config: BotConfig, seed: u64) -> Self {
        Self::with_shuffler(config, RandomShuffler::seeded(seed))
    }
}

impl<S: MoveShuffler> CollectorBot<S> {
    pub fn with_shuffler(config: BotConfig, shuffler: S) -> Self {
        Self {
            config,
            shuffler,
            goal: None,
        }
    }

    /// The goal chosen on the most recent tick that chose one.
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// Chooses this tick's move for `me`.
    pub fn decide(&mut self, me: &GameObject, board: &Board) -> Move {
        self.decide_traced(me, board).movement
    }

    /// Chooses this tick's move and reports how it was reached.
    pub fn decide_traced(&mut self, me: &GameObject, board: &Board) -> Decision {
        let Some(ctx) = AiContext::try_new(me, board, &self.config) else {
            tracing::warn!("Bot {} has no position, staying", me.id);
            return Decision::idle();
        };

        let ranked = TargetScorer::rank(&ctx);
        let best = ranked.first();

        if let Some(plan) = ReturnPolicy::evaluate(&ctx, best) {
            match plan.goal {
                Some(goal) => {
                    self.goal = Some(goal);
                    let movement = select_direction(
                        ctx.position,
                        Some(goal),
                        &plan.avoid,
                        board,
                        &mut self.shuffler,
                    );
                    tracing::debug!("Bot {} returning to base via {}: {}", me.id, goal, movement);
                    return Decision {
                        reason: DecisionReason::ReturnToBase(plan.trigger),
                        goal: Some(goal),
                        avoid: plan.avoid,
                        movement,
                    };
                }
                None => tracing::warn!(
                    "Bot {} must return ({:?}) but has no base, continuing",
                    me.id,
                    plan.trigger
                ),
            }
        }

        let floor = -2.0 * (f64::from(board.width) + f64::from(board.height));
        if let Some(best) = best.filter(|candidate| candidate.score > floor)
            && let Some(goal) = best.goal_from(ctx.position)
        {
            self.goal = Some(goal);

            let (reason, avoid) = match best.kind {
                CandidateKind::Tackle => {
                    let mut avoid: AvoidSet = ctx
                        .rivals()
                        .iter()
                        .filter(|rival| rival.id != best.target.id)
                        .filter_map(|rival| rival.position)
                        .collect();
                    avoid.extend(ctx.teleporter_positions());
                    (DecisionReason::Tackle, avoid)
                }
                CandidateKind::Diamond => {
                    let mut avoid = ctx.rival_positions();
                    avoid.extend(ctx.teleporter_positions());
                    if let Some(entry) = best.entry_position() {
                        avoid.remove(&entry);
                    }
                    (DecisionReason::Collect, avoid)
                }
            };

            let movement =
                select_direction(ctx.position, Some(goal), &avoid, board, &mut self.shuffler);
            tracing::debug!(
                "Bot {} {} {} at {}: {}",
                me.id,
                reason.label(),
                best.target.id,
                goal,
                movement
            );
            return Decision {
                reason,
                goal: Some(goal),
                avoid,
                movement,
            };
        }

        let remaining = board.diamonds().count();
        let threshold = self.config.low_diamond_threshold;
        if (remaining == 0 || remaining < threshold)
            && let Some(button) = board.buttons().next()
        {
            self.goal = button.position;
            if let Some(goal) = button.position {
                let mut avoid = ctx.rival_positions();
                avoid.extend(ctx.teleporter_positions());
                let movement =
                    select_direction(ctx.position, Some(goal), &avoid, board, &mut self.shuffler);
                tracing::debug!(
                    "Bot {} heading to button at {} ({} diamonds left): {}",
                    me.id,
                    goal,
                    remaining,
                    movement
                );
                return Decision {
                    reason: DecisionReason::PressButton,
                    goal: Some(goal),
                    avoid,
                    movement,
                };
            }
        }

        tracing::debug!("Bot {} found nothing worth pursuing, staying", me.id);
        Decision::idle()
    }
}

impl<S: MoveShuffler> MoveProvider for CollectorBot<S> {
    fn next_move(&mut self, bot: ObjectId, board: &Board) -> Result<Move> {
        board.validate()?;

        let me = board.bot(bot).ok_or(RuntimeError::BotNotFound(bot))?;
        if me.position.is_none() {
            return Err(RuntimeError::MissingPosition(bot));
        }

        Ok(self.decide(me, board))
    }
}
