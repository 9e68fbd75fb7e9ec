//! Command-line front end for the diamond-collecting bot.
//!
//! The game loop itself (HTTP polling, move submission) lives outside this
//! crate. What it provides is everything needed to run one decision offline:
//!
//! - [`config`] loads [`BotConfig`](diamonds_core::BotConfig) from TOML and
//!   environment overrides
//! - [`snapshot`] decodes board snapshots as the game server emits them
//! - [`commands`] implements the `decide` and `explain` subcommands
//! - [`logging`] sets up the tracing subscriber

pub mod commands;
pub mod config;
pub mod logging;
pub mod snapshot;

pub use config::{load_config_with, process_env};
pub use snapshot::{BoardSource, decode_board, read_board};
