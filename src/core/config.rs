//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "https://countries.trevorblades.com/graphql";
pub const DEFAULT_USER_AGENT: &str = "CountriesApp/1.0";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub log_level: LevelFilter,
}

/// Values supplied on the command line. `None` means not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides<'a> {
    pub endpoint: Option<&'a str>,
    pub log_level: Option<&'a str>,
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

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(AtlasConfig::default())
        }
    }
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<AtlasConfig, ConfigError> {
    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Atlas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
#                                    # Or set ATLAS_LOG_LEVEL / pass --log-level

# [api]
# endpoint = "https://countries.trevorblades.com/graphql"   # Or ATLAS_ENDPOINT / --endpoint
# user_agent = "CountriesApp/1.0"
# request_timeout_secs = 30
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AtlasConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &AtlasConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli
        .endpoint
        .map(|s| s.to_string())
        .or_else(|| env("ATLAS_ENDPOINT"))
        .or_else(|| config.api.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let user_agent = config
        .api
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    let request_timeout = Duration::from_secs(
        config
            .api
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    );

    // Log level: CLI → env → config → default. Unparseable values fall through.
    let log_level = cli
        .log_level
        .map(|s| s.to_string())
        .into_iter()
        .chain(env("ATLAS_LOG_LEVEL"))
        .chain(config.general.log_level.clone())
        .find_map(|raw| match raw.trim().parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Ignoring unknown log level '{}'", raw);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        endpoint,
        user_agent,
        request_timeout,
        log_level,
    }
}
