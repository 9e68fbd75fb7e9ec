//! Abstraction for sourcing a bot's move each tick.
//!
//! The game loop hands a provider the board snapshot and the bot to control,
//! and sends whatever move comes back to the server.
use diamonds_core::{Board, GameObject, Move, ObjectId};

use super::errors::{Result, RuntimeError};

/// Trait for choosing a bot's next move from a board snapshot.
///
/// Implementations must answer synchronously within the tick; the snapshot
/// is only valid until the next one arrives.
pub trait MoveProvider {
    fn next_move(&mut self, bot: ObjectId, board: &Board) -> Result<Move>;
}

/// How a caller identifies the controlled bot in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotRef {
    Id(ObjectId),
    Name(String),
}

impl BotRef {
    pub fn resolve<'a>(&self, board: &'a Board) -> Result<&'a GameObject> {
        match self {
            BotRef::Id(id) => board.bot(*id).ok_or(RuntimeError::BotNotFound(*id)),
            BotRef::Name(name) => board
                .bot_named(name)
                .ok_or_else(|| RuntimeError::BotNameNotFound(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diamonds_core::Position;

    #[test]
    fn resolves_by_id_and_name() {
        let board = Board::new(5, 5)
            .with_object(GameObject::bot(3, Position::new(1, 1)).with_name("stima"));

        let by_id = BotRef::Id(ObjectId(3)).resolve(&board).expect("bot 3 exists");
        let by_name = BotRef::Name("stima".into())
            .resolve(&board)
            .expect("bot named stima exists");
        assert_eq!(by_id.id, by_name.id);

        let missing = BotRef::Name("ghost".into()).resolve(&board);
        assert!(matches!(missing, Err(RuntimeError::BotNameNotFound(name)) if name == "ghost"));
    }
}
