//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sentient-studio/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover all
//! options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StudioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_generator: Option<String>,
    pub reply_timeout_secs: Option<u64>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GENERATOR: &str = "placeholder";
pub const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "sentient-studio.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub generator: String,
    pub reply_timeout: Duration,
    pub log_file: PathBuf,
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

/// Returns the path to `~/.sentient-studio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sentient-studio").join("config.toml"))
}

/// Load config from `~/.sentient-studio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StudioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StudioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StudioConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(StudioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: StudioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Sentient Studio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_generator = "placeholder"  # Reply generator to use
# reply_timeout_secs = 30            # Give up on a reply after this long
# log_file = "sentient-studio.log"   # Diagnostic log location
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
///
/// `cli_generator` and `cli_log_file` are from CLI flags (None = not specified).
pub fn resolve(
    config: &StudioConfig,
    cli_generator: Option<&str>,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    // Generator: CLI → env → config → default
    let generator = cli_generator
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SENTIENT_GENERATOR").ok())
        .or_else(|| config.general.default_generator.clone())
        .unwrap_or_else(|| DEFAULT_GENERATOR.to_string());

    // Reply timeout: env → config → default
    let reply_timeout_secs = std::env::var("SENTIENT_REPLY_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .or(config.general.reply_timeout_secs)
        .unwrap_or(DEFAULT_REPLY_TIMEOUT_SECS);

    // Log file: CLI → env → config → default
    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SENTIENT_LOG_FILE").ok())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        generator,
        reply_timeout: Duration::from_secs(reply_timeout_secs),
        log_file: PathBuf::from(log_file),
    }
}
