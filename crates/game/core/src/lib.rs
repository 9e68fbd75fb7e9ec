//! Board model and geometry shared by the collector bot and its tools.
//!
//! `diamonds-core` defines the per-tick snapshot types (board, objects,
//! positions), the move vocabulary handed back to the game engine, the
//! tunable scoring constants, and the distance estimator that understands
//! teleporter shortcuts. Everything here is pure and allocation-light; the
//! decision pipeline that consumes it lives in `diamonds-runtime`.
pub mod action;
pub mod config;
pub mod error;
pub mod path;
pub mod state;

pub use action::{CardinalDirection, Move};
pub use config::BotConfig;
pub use error::SnapshotError;
pub use path::{PathEstimate, TeleporterIndex, manhattan, shortest_path};
pub use state::{Board, Distance, GameObject, ObjectId, ObjectKind, Position, Properties};
