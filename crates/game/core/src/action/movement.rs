use std::fmt;

use crate::state::Position;

/// One of the four axis-aligned steps a bot can take.
///
/// Names follow the game server's move endpoint; the y axis grows downward so
/// `North` decrements y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    /// Order the fallback moves take before they are shuffled.
    pub const FALLBACK_ORDER: [CardinalDirection; 4] = [
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
        CardinalDirection::North,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::South => (0, 1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Inverse of [`delta`](Self::delta); diagonal or zero deltas have no direction.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(CardinalDirection::North),
            (0, 1) => Some(CardinalDirection::South),
            (1, 0) => Some(CardinalDirection::East),
            (-1, 0) => Some(CardinalDirection::West),
            _ => None,
        }
    }

    pub fn step(self, from: Position) -> Position {
        let (dx, dy) = self.delta();
        Position::new(from.x.saturating_add(dx), from.y.saturating_add(dy))
    }
}

/// Single-tick move returned to the game engine.
///
/// Either one cardinal step or [`Move::STAY`]; a diagonal move cannot be
/// constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    direction: Option<CardinalDirection>,
}

impl Move {
    pub const STAY: Self = Self { direction: None };

    pub const fn toward(direction: CardinalDirection) -> Self {
        Self {
            direction: Some(direction),
        }
    }

    pub fn direction(self) -> Option<CardinalDirection> {
        self.direction
    }

    pub fn is_stay(self) -> bool {
        self.direction.is_none()
    }

    /// Signed unit pair `(dx, dy)`; `(0, 0)` for a stay.
    pub fn delta(self) -> (i32, i32) {
        self.direction.map_or((0, 0), CardinalDirection::delta)
    }

    /// Cell reached by applying this move to `from`.
    pub fn apply(self, from: Position) -> Position {
        self.direction.map_or(from, |direction| direction.step(from))
    }
}

impl From<CardinalDirection> for Move {
    fn from(direction: CardinalDirection) -> Self {
        Self::toward(direction)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{direction}"),
            None => f.write_str("STAY"),
        }
    }
}
