//! Distance estimation on the board, teleporter shortcuts included.
//!
//! Bots move one tile per tick along the grid axes, so the walking distance
//! between two cells is their Manhattan distance. A teleporter pair adds a
//! second route: walk to an entry, reappear on its partner, walk on from there.
//! [`shortest_path`] picks whichever of the two is strictly shorter.

pub mod teleporter;

pub use teleporter::TeleporterIndex;

use crate::state::{Distance, GameObject, Position};

/// Manhattan distance, infinite when either end is unknown.
pub fn manhattan(a: Option<Position>, b: Option<Position>) -> Distance {
    match (a, b) {
        (Some(a), Some(b)) => Distance::Finite(a.manhattan_distance(b)),
        _ => Distance::Infinite,
    }
}

/// Result of [`shortest_path`]: the distance and, when a teleporter route
/// wins, the entry to step into and the exit it leads to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathEstimate<'a> {
    pub distance: Distance,
    pub entry: Option<&'a GameObject>,
    pub exit: Option<&'a GameObject>,
}

impl<'a> PathEstimate<'a> {
    pub fn direct(distance: Distance) -> Self {
        Self {
            distance,
            entry: None,
            exit: None,
        }
    }

    pub fn uses_teleporter(&self) -> bool {
        self.entry.is_some()
    }

    /// Cell of the teleporter to walk into, if the route uses one.
    pub fn entry_position(&self) -> Option<Position> {
        self.entry.and_then(|entry| entry.position)
    }
}

/// Shortest distance from `start` to `end`, considering every usable
/// teleporter pair as a shortcut.
///
/// Ties between the teleport route and the direct route go to the direct
/// route. An unknown `end` yields an infinite distance and no teleporter.
pub fn shortest_path<'a>(
    start: Position,
    end: Option<Position>,
    teleporters: &TeleporterIndex<'a>,
) -> PathEstimate<'a> {
    let Some(end) = end else {
        return PathEstimate::direct(Distance::Infinite);
    };

    let direct = Distance::Finite(start.manhattan_distance(end));
    if teleporters.is_empty() {
        return PathEstimate::direct(direct);
    }

    let mut best = PathEstimate::direct(Distance::Infinite);

    for entry in teleporters.iter() {
        let Some(entry_pos) = entry.position else {
            continue;
        };
        let Some(exit) = teleporters.pair_of(entry) else {
            continue;
        };
        let Some(exit_pos) = exit.position else {
            continue;
        };

        let distance = Distance::Finite(start.manhattan_distance(entry_pos))
            + Distance::Finite(exit_pos.manhattan_distance(end));
        if distance < best.distance {
            best = PathEstimate {
                distance,
                entry: Some(entry),
                exit: Some(exit),
            };
        }
    }

    if best.distance < direct {
        best
    } else {
        PathEstimate::direct(direct)
    }
}
