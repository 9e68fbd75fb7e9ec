//! Decision runtime for the diamond-collecting bot.
//!
//! This crate turns a board snapshot from `diamonds-core` into a single move
//! per tick. Consumers embed [`CollectorBot`] directly, or drive it through
//! the [`MoveProvider`] trait.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait and error types
//! - [`providers`] hosts the scoring, return policy and steering pipeline
pub mod api;
pub mod providers;

pub use api::{BotRef, MoveProvider, Result, RuntimeError};
pub use providers::ai::{
    AiContext, AvoidSet, Candidate, CandidateKind, CollectorBot, Decision, DecisionReason,
    FixedOrder, MoveShuffler, RandomShuffler, ReturnPlan, ReturnPolicy, ReturnTrigger,
    TargetScorer, rank_candidates, select_direction,
};
