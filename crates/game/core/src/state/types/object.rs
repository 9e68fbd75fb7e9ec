//! Board objects as delivered by the game server each tick.

use std::fmt;

use super::{ObjectId, Position};

/// Type tag carried by every board object.
///
/// Unknown tags are preserved as [`ObjectKind::Other`] so snapshots from newer
/// servers still decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ObjectKind {
    Diamond,
    Teleporter,
    DiamondButton,
    Bot,
    Base,
    Other(String),
}

impl ObjectKind {
    pub fn tag(&self) -> &str {
        match self {
            Self::Diamond => "DiamondGameObject",
            Self::Teleporter => "TeleportGameObject",
            Self::DiamondButton => "DiamondButtonGameObject",
            Self::Bot => "BotGameObject",
            Self::Base => "BaseGameObject",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ObjectKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "DiamondGameObject" => Self::Diamond,
            "TeleportGameObject" => Self::Teleporter,
            "DiamondButtonGameObject" => Self::DiamondButton,
            "BotGameObject" => Self::Bot,
            "BaseGameObject" => Self::Base,
            _ => Self::Other(tag),
        }
    }
}

impl From<ObjectKind> for String {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Other(tag) => tag,
            known => known.tag().to_owned(),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Type-dependent attributes of a board object.
///
/// Every field is optional on the wire; the accessor methods on
/// [`GameObject`] apply the defaults the decision logic relies on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Properties {
    /// Diamond value.
    pub points: Option<u32>,

    /// Teleporter partner reference.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "pair_id", deserialize_with = "wire::lenient_id")
    )]
    pub pair_id: Option<ObjectId>,

    /// Diamonds a bot is currently carrying.
    pub diamonds: Option<u32>,

    #[cfg_attr(feature = "serde", serde(alias = "inventory_size"))]
    pub inventory_size: Option<u32>,

    /// Home base of a bot.
    pub base: Option<Position>,

    #[cfg_attr(feature = "serde", serde(alias = "milliseconds_left"))]
    pub milliseconds_left: Option<u64>,

    pub name: Option<String>,
    pub score: Option<u32>,
}

/// A single object on the board: diamond, teleporter, bot, base, button...
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameObject {
    pub id: ObjectId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ObjectKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Properties,
}

impl GameObject {
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self {
            id,
            kind,
            position: None,
            properties: Properties::default(),
        }
    }

    pub fn diamond(id: u32, position: Position, points: u32) -> Self {
        Self::new(ObjectId(id), ObjectKind::Diamond)
            .at(position)
            .with_properties(Properties {
                points: Some(points),
                ..Properties::default()
            })
    }

    pub fn teleporter(id: u32, position: Position) -> Self {
        Self::new(ObjectId(id), ObjectKind::Teleporter).at(position)
    }

    pub fn bot(id: u32, position: Position) -> Self {
        Self::new(ObjectId(id), ObjectKind::Bot).at(position)
    }

    pub fn button(id: u32, position: Position) -> Self {
        Self::new(ObjectId(id), ObjectKind::DiamondButton).at(position)
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_pair(mut self, pair: ObjectId) -> Self {
        self.properties.pair_id = Some(pair);
        self
    }

    pub fn with_diamonds(mut self, diamonds: u32) -> Self {
        self.properties.diamonds = Some(diamonds);
        self
    }

    pub fn with_inventory_size(mut self, inventory_size: u32) -> Self {
        self.properties.inventory_size = Some(inventory_size);
        self
    }

    pub fn with_base(mut self, base: Position) -> Self {
        self.properties.base = Some(base);
        self
    }

    pub fn with_milliseconds_left(mut self, milliseconds_left: u64) -> Self {
        self.properties.milliseconds_left = Some(milliseconds_left);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.properties.name = Some(name.into());
        self
    }

    /// Diamond value, zero when absent.
    pub fn points(&self) -> u32 {
        self.properties.points.unwrap_or(0)
    }

    /// Diamonds carried, zero when absent.
    pub fn carried(&self) -> u32 {
        self.properties.diamonds.unwrap_or(0)
    }

    pub fn inventory_size_or(&self, default: u32) -> u32 {
        self.properties.inventory_size.unwrap_or(default)
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.name.as_deref()
    }
}

#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Deserializer};

    use crate::state::ObjectId;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Number(u32),
        Text(String),
    }

    /// Accepts ids sent either as numbers or as numeric strings.
    ///
    /// Non-numeric strings decode as `None`, leaving the teleporter to the
    /// implicit two-teleporter pairing.
    pub(super) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = Option::<IdRepr>::deserialize(deserializer)?;
        Ok(match repr {
            Some(IdRepr::Number(id)) => Some(ObjectId(id)),
            Some(IdRepr::Text(text)) => text.trim().parse().ok().map(ObjectId),
            None => None,
        })
    }
}
