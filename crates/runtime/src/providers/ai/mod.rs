//! Utility-scoring brain for the diamond-collecting bot.
//!
//! One tick of decision-making flows through these stages:
//!
//! 1. **Context**: Snapshot the bot, its rivals and the teleporter pairs
//!    ([`AiContext`])
//!
//! 2. **Scoring**: Rank every diamond and tackle target on a single scalar
//!    - Diamonds: nearer first, points break ties
//!    - Tackles: adjacent rivals carrying a haul, heavily penalized
//!
//! 3. **Return Policy**: Override targeting when the inventory is full, time
//!    is short, or the only top-up left would not fit ([`ReturnPolicy`])
//!
//! 4. **Direction**: Turn the goal into one legal step around avoided cells
//!    ([`select_direction`])
//!
//! # Core Components
//!
//! - [`CollectorBot`]: The engine implementing [`crate::MoveProvider`]
//! - [`TargetScorer`]: Ranks candidates best first
//! - [`MoveShuffler`]: Injectable ordering for fallback moves
//! - [`Decision`]: Trace of what was chosen and why

pub mod context;
pub mod direction;
pub mod goal;
pub mod provider;
pub mod return_policy;
pub mod scoring;
pub mod shuffle;

pub use context::{AiContext, AvoidSet};
pub use direction::select_direction;
pub use goal::{Decision, DecisionReason};
pub use provider::CollectorBot;
pub use return_policy::{ReturnPlan, ReturnPolicy, ReturnTrigger};
pub use scoring::selector::rank_candidates;
pub use scoring::{Candidate, CandidateKind, TargetScorer};
pub use shuffle::{FixedOrder, MoveShuffler, RandomShuffler};
