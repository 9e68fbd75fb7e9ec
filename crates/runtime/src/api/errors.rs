//! Error types surfaced by the runtime API.
//!
//! Decisions themselves never fail; these errors cover locating the bot in a
//! snapshot and rejecting snapshots that cannot be reasoned about.
use diamonds_core::{ObjectId, SnapshotError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("bot {0} is not on the board")]
    BotNotFound(ObjectId),

    #[error("no bot named '{0}' on the board")]
    BotNameNotFound(String),

    #[error("bot {0} has no position")]
    MissingPosition(ObjectId),

    #[error(transparent)]
    InvalidSnapshot(#[from] SnapshotError),
}

impl RuntimeError {
    /// Stable identifier for scripts consuming CLI output.
    pub const fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::BotNotFound(_) => "BOT_NOT_FOUND",
            RuntimeError::BotNameNotFound(_) => "BOT_NAME_NOT_FOUND",
            RuntimeError::MissingPosition(_) => "MISSING_POSITION",
            RuntimeError::InvalidSnapshot(err) => err.error_code(),
        }
    }
}
