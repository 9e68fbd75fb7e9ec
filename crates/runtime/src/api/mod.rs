//! Public runtime API surface.
//!
//! Gathers the types consumers of the runtime crate interact with, so the
//! decision pipeline in [`crate::providers`] can stay focused on scoring.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{BotRef, MoveProvider};
