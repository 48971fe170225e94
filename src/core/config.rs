//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sortviz/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::sorter::Direction;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SortvizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub delay_ms: Option<u64>,
    pub item_count: Option<usize>,
    pub max_value: Option<u32>,
    pub direction: Option<Direction>,
    pub seed: Option<u64>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub delay_ms: Option<u64>,
    pub item_count: Option<usize>,
    pub max_value: Option<u32>,
    pub direction: Option<Direction>,
    pub seed: Option<u64>,
    pub values: Option<Vec<u32>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DELAY_MS: u64 = 50;
pub const DEFAULT_ITEM_COUNT: usize = 48;
pub const DEFAULT_MAX_VALUE: u32 = 100;
pub const MAX_ITEM_COUNT: usize = 512;
pub const MAX_DELAY_MS: u64 = 5_000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub delay_ms: u64,
    pub item_count: usize,
    pub max_value: u32,
    pub direction: Direction,
    pub seed: Option<u64>,
    /// Explicit input; replaces the random array when present.
    pub values: Option<Vec<u32>>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sortviz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sortviz").join("config.toml"))
}

/// Load config from `~/.sortviz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SortvizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SortvizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SortvizConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SortvizConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SortvizConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# sortviz configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# delay_ms = 50                # Pause at each visual step (SORTVIZ_DELAY_MS)
# item_count = 48              # Number of bars (SORTVIZ_ITEM_COUNT), at most 512
# max_value = 100              # Largest random value
# direction = "ascending"      # "ascending" or "descending" (SORTVIZ_DIRECTION)
# seed = 42                    # Fixed shuffle seed for reproducible runs
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SortvizConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Delay: CLI → env → config → default
    let delay_ms = cli
        .delay_ms
        .or_else(|| env_parse("SORTVIZ_DELAY_MS"))
        .or(config.general.delay_ms)
        .unwrap_or(DEFAULT_DELAY_MS)
        .min(MAX_DELAY_MS);

    // Item count: CLI → env → config → default
    let item_count = cli
        .item_count
        .or_else(|| env_parse("SORTVIZ_ITEM_COUNT"))
        .or(config.general.item_count)
        .unwrap_or(DEFAULT_ITEM_COUNT)
        .clamp(1, MAX_ITEM_COUNT);

    // Direction: CLI → env → config → default
    let direction = cli
        .direction
        .or_else(|| {
            std::env::var("SORTVIZ_DIRECTION")
                .ok()
                .and_then(|s| Direction::from_label(&s))
        })
        .or(config.general.direction)
        .unwrap_or_default();

    let max_value = cli
        .max_value
        .or(config.general.max_value)
        .unwrap_or(DEFAULT_MAX_VALUE)
        .max(1);

    // Explicit values are capped like the random array
    let values = cli.values.clone().map(|mut v| {
        if v.len() > MAX_ITEM_COUNT {
            warn!("Truncating {} values to {}", v.len(), MAX_ITEM_COUNT);
            v.truncate(MAX_ITEM_COUNT);
        }
        v
    });

    ResolvedConfig {
        delay_ms,
        item_count,
        max_value,
        direction,
        seed: cli.seed.or(config.general.seed),
        values,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", key, raw);
            None
        }
    }
}
