//! Return-to-base policy.
//!
//! Diamonds only score once they are dropped at the base, so a loaded bot
//! has to decide each tick whether to keep collecting or head home. The
//! policy overrides normal targeting when any trigger fires:
//!
//! | Trigger              | Condition                                                  |
//! |----------------------|------------------------------------------------------------|
//! | [`InventoryFull`]    | carried >= capacity                                        |
//! | [`RunningOutOfTime`] | path to base + safety buffer >= seconds left               |
//! | [`LowValueTopUp`]    | one slot left and the best target is a 2-point diamond     |
//!
//! Nothing fires while the bot carries no diamonds.
//!
//! [`InventoryFull`]: ReturnTrigger::InventoryFull
//! [`RunningOutOfTime`]: ReturnTrigger::RunningOutOfTime
//! [`LowValueTopUp`]: ReturnTrigger::LowValueTopUp

use diamonds_core::{Distance, Position};

use super::AiContext;
use super::context::AvoidSet;
use super::scoring::Candidate;

/// Why the bot is heading home.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReturnTrigger {
    InventoryFull,
    RunningOutOfTime,
    /// One slot left and the best target is a red diamond that would not fit.
    LowValueTopUp,
}

/// Outcome of a fired trigger: where to walk and what to stay clear of.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnPlan {
    pub trigger: ReturnTrigger,

    /// Base cell, or the teleporter entry when that route is strictly shorter.
    /// `None` when the bot does not know where its base is.
    pub goal: Option<Position>,

    pub avoid: AvoidSet,
}

impl ReturnPlan {
    pub fn via_teleporter(&self, base: Option<Position>) -> bool {
        self.goal.is_some() && self.goal != base
    }
}

pub struct ReturnPolicy;

impl ReturnPolicy {
    /// Checks the triggers in priority order.
    pub fn trigger(ctx: &AiContext<'_>, best: Option<&Candidate<'_>>) -> Option<ReturnTrigger> {
        let carried = ctx.carried();
        if carried == 0 {
            return None;
        }

        let capacity = ctx.capacity();
        if carried >= capacity {
            return Some(ReturnTrigger::InventoryFull);
        }

        let to_base = ctx.path_to(ctx.base()).distance;
        let buffer = f64::from(ctx.config.safe_return_buffer_seconds);
        if to_base.as_f64() + buffer >= ctx.seconds_left() {
            return Some(ReturnTrigger::RunningOutOfTime);
        }

        let top_up = best.is_some_and(|candidate| {
            candidate.is_diamond() && candidate.points == ctx.config.topup_skip_points
        });
        if carried + 1 == capacity && top_up {
            return Some(ReturnTrigger::LowValueTopUp);
        }

        None
    }

    /// Evaluates the policy, returning a plan only when the bot must go home.
    pub fn evaluate(ctx: &AiContext<'_>, best: Option<&Candidate<'_>>) -> Option<ReturnPlan> {
        let trigger = Self::trigger(ctx, best)?;
        let base = ctx.base();

        let mut goal = base;
        let mut entry = None;
        if let Some(base) = base {
            let path = ctx.path_to(Some(base));
            let direct = Distance::Finite(ctx.position.manhattan_distance(base));
            if let Some(entry_pos) = path.entry_position()
                && path.distance < direct
                && entry_pos != ctx.position
            {
                goal = Some(entry_pos);
                entry = Some(entry_pos);
            }
        }

        let mut avoid = ctx.rival_positions();
        avoid.extend(
            ctx.teleporter_positions()
                .filter(|position| Some(*position) != entry),
        );
        if let Some(goal) = goal {
            avoid.remove(&goal);
        }

        tracing::debug!(
            "ReturnPolicy: {:?} fired (carried={}, capacity={}, goal={:?})",
            trigger,
            ctx.carried(),
            ctx.capacity(),
            goal
        );

        Some(ReturnPlan {
            trigger,
            goal,
            avoid,
        })
    }
}
