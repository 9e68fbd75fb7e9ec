//! Bot configuration loading.
//!
//! Sources are layered, later ones winning:
//!
//! 1. Built-in defaults ([`BotConfig::default`])
//! 2. An optional TOML file (every key optional)
//! 3. `DIAMONDS_*` environment variables
//!
//! Environment variables:
//! - `DIAMONDS_CONFIG` - TOML file used when no `--config` is given
//! - `DIAMONDS_MIN_TACKLE` - Diamonds a rival must carry to be tackled (default: 5)
//! - `DIAMONDS_TACKLE_RANGE` - Furthest tackle distance (default: 1)
//! - `DIAMONDS_RETURN_BUFFER_SECS` - Slack kept when racing home (default: 3)
//! - `DIAMONDS_INVENTORY_SIZE` - Capacity when the server omits it (default: 5)
//! - `DIAMONDS_LOW_DIAMOND_THRESHOLD` - Diamonds left before pressing the button (default: 4)
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use diamonds_core::BotConfig;

pub const ENV_CONFIG: &str = "DIAMONDS_CONFIG";
pub const ENV_MIN_TACKLE: &str = "DIAMONDS_MIN_TACKLE";
pub const ENV_TACKLE_RANGE: &str = "DIAMONDS_TACKLE_RANGE";
pub const ENV_RETURN_BUFFER_SECS: &str = "DIAMONDS_RETURN_BUFFER_SECS";
pub const ENV_INVENTORY_SIZE: &str = "DIAMONDS_INVENTORY_SIZE";
pub const ENV_LOW_DIAMOND_THRESHOLD: &str = "DIAMONDS_LOW_DIAMOND_THRESHOLD";

/// Reads a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Loads the configuration from `path` (if any), reading variables through
/// `lookup` ([`process_env`] outside tests).
///
/// An explicit `path` wins over `DIAMONDS_CONFIG`.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<BotConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let env_path = lookup(ENV_CONFIG)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);
    let mut config = match path.or(env_path.as_deref()) {
        Some(path) => from_file(path)?,
        None => BotConfig::default(),
    };
    apply_env_overrides(&mut config, lookup);
    Ok(config)
}

pub fn from_file(path: &Path) -> Result<BotConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Applies `DIAMONDS_*` overrides read through `lookup`.
///
/// Unparseable values are ignored with a warning.
pub fn apply_env_overrides<F>(config: &mut BotConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(min) = read_var(&lookup, ENV_MIN_TACKLE) {
        config.min_diamonds_to_tackle = min;
    }
    if let Some(range) = read_var(&lookup, ENV_TACKLE_RANGE) {
        config.max_tackle_distance = range;
    }
    if let Some(buffer) = read_var(&lookup, ENV_RETURN_BUFFER_SECS) {
        config.safe_return_buffer_seconds = buffer;
    }
    if let Some(size) = read_var::<u32, _>(&lookup, ENV_INVENTORY_SIZE) {
        config.default_inventory_size = size.max(1);
    }
    if let Some(threshold) = read_var(&lookup, ENV_LOW_DIAMOND_THRESHOLD) {
        config.low_diamond_threshold = threshold;
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}
