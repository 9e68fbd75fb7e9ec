//! Decision records.
//!
//! Every tick resolves to one [`Decision`]: the reason the bot chose its
//! goal, the goal cell, the cells it refused to step on, and the resulting
//! move. The move is all the game engine needs; the rest exists for
//! tracing and for tools that explain a decision after the fact.

use diamonds_core::{Move, Position};

use super::context::AvoidSet;
use super::return_policy::ReturnTrigger;

/// Which branch of the decision pipeline produced the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    /// Heading home to bank the carried diamonds.
    ReturnToBase(ReturnTrigger),
    Collect,
    Tackle,
    /// Walking to the button that regenerates diamonds.
    PressButton,
    /// Nothing worth pursuing; standing still.
    Idle,
}

impl DecisionReason {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionReason::ReturnToBase(ReturnTrigger::InventoryFull) => "return (inventory full)",
            DecisionReason::ReturnToBase(ReturnTrigger::RunningOutOfTime) => {
                "return (running out of time)"
            }
            DecisionReason::ReturnToBase(ReturnTrigger::LowValueTopUp) => {
                "return (skip red diamond top-up)"
            }
            DecisionReason::Collect => "collect",
            DecisionReason::Tackle => "tackle",
            DecisionReason::PressButton => "press button",
            DecisionReason::Idle => "idle",
        }
    }
}

/// Full trace of a single tick's decision.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub reason: DecisionReason,
    pub goal: Option<Position>,
    pub avoid: AvoidSet,
    pub movement: Move,
}

impl Decision {
    pub fn idle() -> Self {
        Self {
            reason: DecisionReason::Idle,
            goal: None,
            avoid: AvoidSet::new(),
            movement: Move::STAY,
        }
    }
}
