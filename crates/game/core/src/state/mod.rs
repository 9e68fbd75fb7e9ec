//! Board snapshot representation.
//!
//! This module owns the data structures that describe a single tick as the
//! game server sends it: the board bounds and every object on it. Decision
//! layers borrow a snapshot for the duration of one tick and never mutate it.
pub mod types;

pub use types::{Board, Distance, GameObject, ObjectId, ObjectKind, Position, Properties};
