use std::collections::HashMap;

use crate::state::{Board, GameObject, ObjectId, Position};

/// Teleporters on the board with their pairing resolved by id.
///
/// Built once per tick. A teleporter whose partner cannot be resolved is
/// inert and never offered as a shortcut.
#[derive(Clone, Debug, Default)]
pub struct TeleporterIndex<'a> {
    teleporters: Vec<&'a GameObject>,
    by_id: HashMap<ObjectId, &'a GameObject>,
}

impl<'a> TeleporterIndex<'a> {
    pub fn new(teleporters: impl IntoIterator<Item = &'a GameObject>) -> Self {
        let teleporters: Vec<_> = teleporters.into_iter().collect();
        let by_id = teleporters.iter().map(|tp| (tp.id, *tp)).collect();
        Self { teleporters, by_id }
    }

    pub fn from_board(board: &'a Board) -> Self {
        Self::new(board.teleporters())
    }

    pub fn len(&self) -> usize {
        self.teleporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teleporters.is_empty()
    }

    /// Teleporters in board order.
    pub fn iter(&self) -> impl Iterator<Item = &'a GameObject> + '_ {
        self.teleporters.iter().copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.teleporters.iter().filter_map(|tp| tp.position)
    }

    /// Resolves the exit paired with `teleporter`.
    ///
    /// With an explicit `pair_id` the partner is the teleporter carrying that
    /// id, or failing that another teleporter sharing the same `pair_id`.
    /// Without one, the only other teleporter is the partner when exactly two
    /// exist.
    pub fn pair_of(&self, teleporter: &GameObject) -> Option<&'a GameObject> {
        if self.teleporters.len() < 2 {
            return None;
        }

        match teleporter.properties.pair_id {
            Some(pair_id) => self
                .by_id
                .get(&pair_id)
                .copied()
                .filter(|partner| partner.id != teleporter.id)
                .or_else(|| {
                    self.iter().find(|other| {
                        other.id != teleporter.id && other.properties.pair_id == Some(pair_id)
                    })
                }),
            None if self.teleporters.len() == 2 => {
                self.iter().find(|other| other.id != teleporter.id)
            }
            None => None,
        }
    }
}
