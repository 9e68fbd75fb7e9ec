//! Direction selection.
//!
//! Turns a goal cell into a single legal step. The preferred moves are the
//! axis components of the ideal direction (horizontal first), followed by
//! the remaining cardinal moves in shuffled order. The first move that stays
//! on the board and does not land on an avoided cell wins; if none does the
//! bot stays put.

use arrayvec::ArrayVec;
use diamonds_core::{Board, CardinalDirection, Move, Position};

use super::context::AvoidSet;
use super::shuffle::MoveShuffler;

/// Picks the next step from `current` toward `goal`.
///
/// Returns [`Move::STAY`] when there is no goal, when the bot already stands
/// on it, or when every candidate step is off the board or avoided.
pub fn select_direction<S: MoveShuffler + ?Sized>(
    current: Position,
    goal: Option<Position>,
    avoid: &AvoidSet,
    board: &Board,
    shuffler: &mut S,
) -> Move {
    let Some(goal) = goal else {
        return Move::STAY;
    };

    let dx = goal.x.cmp(&current.x) as i32;
    let dy = goal.y.cmp(&current.y) as i32;
    if dx == 0 && dy == 0 {
        return Move::STAY;
    }

    let mut preferred: ArrayVec<CardinalDirection, 4> = ArrayVec::new();
    preferred.extend(CardinalDirection::from_delta(dx, 0));
    preferred.extend(CardinalDirection::from_delta(0, dy));

    let mut fallback = CardinalDirection::FALLBACK_ORDER;
    shuffler.shuffle(&mut fallback);
    for direction in fallback {
        if !preferred.contains(&direction) {
            preferred.push(direction);
        }
    }

    for direction in preferred {
        let next = direction.step(current);
        if board.contains(next) && !avoid.contains(&next) {
            return Move::toward(direction);
        }
    }

    tracing::debug!("select_direction: boxed in at {current}, staying");
    Move::STAY
}
