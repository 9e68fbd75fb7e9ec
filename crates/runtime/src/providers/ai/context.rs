//! Per-tick context for the collector bot's decision pipeline.
//!
//! The [`AiContext`] is built once per tick and shared by every stage
//! (target scoring, the return-to-base policy, direction selection). It
//! caches what those stages would otherwise recompute:
//!
//! - the controlled bot and its position
//! - the rival bots (every bot except ours)
//! - the teleporter index with pairs resolved by id

use std::collections::BTreeSet;

use diamonds_core::{
    Board, BotConfig, GameObject, PathEstimate, Position, TeleporterIndex, shortest_path,
};

/// Cells the bot must not step onto this tick.
pub type AvoidSet = BTreeSet<Position>;

/// Read-only view of one tick, from the controlled bot's point of view.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the board snapshot it borrows.
/// Decisions complete synchronously within a tick, so the snapshot always
/// outlives the context.
pub struct AiContext<'a> {
    /// The bot making the decision.
    pub me: &'a GameObject,

    /// Where the bot currently stands.
    pub position: Position,

    /// The full board snapshot.
    pub board: &'a Board,

    pub config: &'a BotConfig,

    /// Teleporters with pairing resolved once for the whole tick.
    pub teleporters: TeleporterIndex<'a>,

    rivals: Vec<&'a GameObject>,
}

impl<'a> AiContext<'a> {
    /// Builds the context, or `None` when the bot has no position on the board.
    pub fn try_new(me: &'a GameObject, board: &'a Board, config: &'a BotConfig) -> Option<Self> {
        let position = me.position?;
        let rivals = board.bots().filter(|bot| bot.id != me.id).collect();

        Some(Self {
            me,
            position,
            board,
            config,
            teleporters: TeleporterIndex::from_board(board),
            rivals,
        })
    }

    /// Every bot on the board except the controlled one.
    pub fn rivals(&self) -> &[&'a GameObject] {
        &self.rivals
    }

    /// Diamonds currently carried.
    pub fn carried(&self) -> u32 {
        self.me.carried()
    }

    /// Inventory capacity, falling back to the configured default.
    pub fn capacity(&self) -> u32 {
        self.me.inventory_size_or(self.config.default_inventory_size)
    }

    pub fn base(&self) -> Option<Position> {
        self.me.properties.base
    }

    /// Remaining match time in seconds, infinite when the server did not say.
    pub fn seconds_left(&self) -> f64 {
        self.me
            .properties
            .milliseconds_left
            .map_or(f64::INFINITY, |ms| ms as f64 / 1000.0)
    }

    /// Shortest route from the bot to `target`, teleporters included.
    pub fn path_to(&self, target: Option<Position>) -> PathEstimate<'a> {
        shortest_path(self.position, target, &self.teleporters)
    }

    /// Positions of all rivals, the default avoid set for every goal.
    pub fn rival_positions(&self) -> AvoidSet {
        self.rivals.iter().filter_map(|bot| bot.position).collect()
    }

    pub fn teleporter_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.teleporters.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diamonds_core::ObjectId;

    #[test]
    fn context_requires_a_position() {
        let config = BotConfig::default();
        let me = GameObject::new(ObjectId(1), diamonds_core::ObjectKind::Bot);
        let board = Board::new(5, 5).with_object(me.clone());
        assert!(AiContext::try_new(&me, &board, &config).is_none());
    }

    #[test]
    fn rivals_exclude_self() {
        let config = BotConfig::default();
        let me = GameObject::bot(1, Position::new(0, 0));
        let board = Board::new(5, 5).with_objects([
            me.clone(),
            GameObject::bot(2, Position::new(3, 3)),
            GameObject::new(ObjectId(3), diamonds_core::ObjectKind::Bot),
        ]);

        let ctx = AiContext::try_new(&me, &board, &config).expect("bot has a position");
        assert_eq!(ctx.rivals().len(), 2);
        assert_eq!(
            ctx.rival_positions().into_iter().collect::<Vec<_>>(),
            vec![Position::new(3, 3)]
        );
    }

    #[test]
    fn defaults_apply_to_missing_properties() {
        let config = BotConfig::default();
        let me = GameObject::bot(1, Position::new(0, 0));
        let board = Board::new(5, 5).with_object(me.clone());

        let ctx = AiContext::try_new(&me, &board, &config).expect("bot has a position");
        assert_eq!(ctx.capacity(), BotConfig::DEFAULT_INVENTORY_SIZE);
        assert_eq!(ctx.carried(), 0);
        assert!(ctx.seconds_left().is_infinite());
        assert!(ctx.base().is_none());
    }
}
