//! Subcommand implementations.
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic.

mod decide;
mod explain;

pub use decide::{Decide, OutputFormat};
pub use explain::Explain;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use diamonds_core::{BotConfig, ObjectId};
use diamonds_runtime::{BotRef, CollectorBot};

use crate::config::load_config_with;

/// Identifies the controlled bot; exactly one flag is required.
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct BotArgs {
    /// Object id of the controlled bot
    #[arg(long, value_name = "ID")]
    pub bot_id: Option<u32>,

    /// Name of the controlled bot
    #[arg(long, value_name = "NAME")]
    pub bot_name: Option<String>,
}

impl BotArgs {
    pub fn bot_ref(&self) -> BotRef {
        match (&self.bot_id, &self.bot_name) {
            (Some(id), _) => BotRef::Id(ObjectId(*id)),
            (None, Some(name)) => BotRef::Name(name.clone()),
            // clap's group guarantees one of the two; an empty name matches nothing
            (None, None) => BotRef::Name(String::new()),
        }
    }
}

/// Options shared by every command that runs the decision engine.
#[derive(Args, Clone, Debug)]
pub struct EngineArgs {
    /// Seed for fallback move shuffling (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// TOML file overriding the default scoring constants (or DIAMONDS_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl EngineArgs {
    /// Loads the configuration, reading `DIAMONDS_*` variables through `env`.
    pub fn load_config<F>(&self, env: F) -> Result<BotConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        load_config_with(self.config.as_deref(), env)
    }

    pub fn build_bot(&self, config: BotConfig) -> CollectorBot {
        match self.seed {
            Some(seed) => CollectorBot::seeded(config, seed),
            None => CollectorBot::new(config),
        }
    }
}
