use std::fmt;
use std::ops::Add;

/// Identifier the game server assigns to every object on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// The y axis grows downward, matching the game server's board layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Taxicab distance between two tiles, saturating at `u32::MAX`.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Walking distance between two cells, or `Infinite` when one end is unknown.
///
/// Every finite distance orders below `Infinite`, so `min`/`<` behave the same
/// way they would on floating point distances with `+inf`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u32),
    Infinite,
}

impl Distance {
    pub const ZERO: Self = Self::Finite(0);

    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Finite(steps) => Some(steps),
            Self::Infinite => None,
        }
    }

    /// Distance as a score operand; `Infinite` maps to `f64::INFINITY`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Finite(steps) => f64::from(steps),
            Self::Infinite => f64::INFINITY,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a.saturating_add(b)),
            _ => Self::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(steps) => write!(f, "{steps}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}
