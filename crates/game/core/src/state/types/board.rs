use std::collections::BTreeSet;

use super::{GameObject, ObjectId, ObjectKind, Position};
use crate::error::SnapshotError;

/// Immutable board snapshot for a single tick.
///
/// `game_objects` holds everything on the board, the controlled bot included.
/// The diamond and bot subsets are views filtered by [`ObjectKind`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Board {
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default, alias = "game_objects"))]
    pub game_objects: Vec<GameObject>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            game_objects: Vec::new(),
        }
    }

    pub fn with_object(mut self, object: GameObject) -> Self {
        self.game_objects.push(object);
        self
    }

    pub fn with_objects(mut self, objects: impl IntoIterator<Item = GameObject>) -> Self {
        self.game_objects.extend(objects);
        self
    }

    /// Returns true when `position` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && i64::from(position.x) < i64::from(self.width)
            && i64::from(position.y) < i64::from(self.height)
    }

    pub fn objects_of(&self, kind: ObjectKind) -> impl Iterator<Item = &GameObject> {
        self.game_objects.iter().filter(move |obj| obj.kind == kind)
    }

    pub fn diamonds(&self) -> impl Iterator<Item = &GameObject> {
        self.objects_of(ObjectKind::Diamond)
    }

    /// Every bot on the board, the controlled one included.
    pub fn bots(&self) -> impl Iterator<Item = &GameObject> {
        self.objects_of(ObjectKind::Bot)
    }

    pub fn teleporters(&self) -> impl Iterator<Item = &GameObject> {
        self.objects_of(ObjectKind::Teleporter)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &GameObject> {
        self.objects_of(ObjectKind::DiamondButton)
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.game_objects.iter().find(|obj| obj.id == id)
    }

    pub fn bot(&self, id: ObjectId) -> Option<&GameObject> {
        self.bots().find(|bot| bot.id == id)
    }

    pub fn bot_named(&self, name: &str) -> Option<&GameObject> {
        self.bots().find(|bot| bot.name() == Some(name))
    }

    /// Checks the structural invariants a decoded snapshot must satisfy.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.width == 0 || self.height == 0 {
            return Err(SnapshotError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }

        let mut seen = BTreeSet::new();
        for object in &self.game_objects {
            if !seen.insert(object.id) {
                return Err(SnapshotError::DuplicateObject(object.id));
            }
            if let Some(position) = object.position
                && !self.contains(position)
            {
                return Err(SnapshotError::OutOfBounds {
                    id: object.id,
                    position,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        Ok(())
    }
}
