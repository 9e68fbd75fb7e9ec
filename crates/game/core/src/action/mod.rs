//! Moves the bot hands back to the game engine each tick.
pub mod movement;

pub use movement::{CardinalDirection, Move};
