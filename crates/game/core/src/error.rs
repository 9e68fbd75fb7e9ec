//! Snapshot validation errors.
//!
//! The decision pipeline itself never fails: missing data degrades to infinite
//! distances or a stay move. Errors only arise at the boundary where a decoded
//! board is checked before the bot sees it.

use crate::state::{ObjectId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board has no cells ({width}x{height})")]
    EmptyBoard { width: u32, height: u32 },

    #[error("object {0} appears more than once on the board")]
    DuplicateObject(ObjectId),

    #[error("object {id} at {position} lies outside the {width}x{height} board")]
    OutOfBounds {
        id: ObjectId,
        position: Position,
        width: u32,
        height: u32,
    },
}

impl SnapshotError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBoard { .. } => "SNAPSHOT_EMPTY_BOARD",
            Self::DuplicateObject(_) => "SNAPSHOT_DUPLICATE_OBJECT",
            Self::OutOfBounds { .. } => "SNAPSHOT_OUT_OF_BOUNDS",
        }
    }
}
