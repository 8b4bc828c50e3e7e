//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.holidaze/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Screen;
use crate::api::{AuthToken, Endpoints};
use crate::core::enquiry::Subject;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HolidazeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub hotels: Vec<Subject>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_view: Option<Screen>,
    pub dashboard: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub enquire_path: Option<String>,
    pub messages_path: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub token: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337/api";
pub const DEFAULT_ENQUIRE_PATH: &str = "/enquiries";
pub const DEFAULT_MESSAGES_PATH: &str = "/messages";
pub const DEFAULT_DASHBOARD: &str = "admin";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: Screen,
    pub dashboard: String,
    pub endpoints: Endpoints,
    pub request_timeout: Option<Duration>,
    pub token: Option<AuthToken>,
    pub hotels: Vec<Subject>,
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

/// Returns the path to `~/.holidaze/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".holidaze").join("config.toml"))
}

/// Load config from `~/.holidaze/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HolidazeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HolidazeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HolidazeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HolidazeConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<HolidazeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: HolidazeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: base_url={:?}, hotels={}, token set={}",
        config.api.base_url,
        config.hotels.len(),
        config.auth.token.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Holidaze Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_view = "hotels"            # "hotels", "messages" or "dashboard"
# dashboard = "admin"                # "admin", "accomodations" or "add"

# [api]
# base_url = "http://localhost:1337/api"   # Or set HOLIDAZE_BASE_URL
# enquire_path = "/enquiries"
# messages_path = "/messages"
# request_timeout_secs = 30                # Unset = no timeout

# [auth]
# token = "eyJ..."                   # Or set HOLIDAZE_TOKEN env var

# [[hotels]]
# id = "12"
# name = "Hotel X"
# location = "Oslo"
# image = "/x.png"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
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
/// `cli_screen` and `cli_dashboard` are from CLI flags (None = not specified).
pub fn resolve(
    config: &HolidazeConfig,
    cli_screen: Option<Screen>,
    cli_dashboard: Option<&str>,
) -> ResolvedConfig {
    // Screen: CLI → config → default
    let start_screen = cli_screen
        .or(config.general.default_view)
        .unwrap_or_default();

    // Dashboard tag: CLI → env → config → default
    let dashboard = cli_dashboard
        .map(|s| s.to_string())
        .or_else(|| std::env::var("HOLIDAZE_DASHBOARD").ok())
        .or_else(|| config.general.dashboard.clone())
        .unwrap_or_else(|| DEFAULT_DASHBOARD.to_string());

    // Base URL: env → config → default
    let base_url = std::env::var("HOLIDAZE_BASE_URL")
        .ok()
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let token = resolve_token(
        std::env::var("HOLIDAZE_TOKEN").ok(),
        config.auth.token.as_deref(),
    );

    ResolvedConfig {
        start_screen,
        dashboard,
        endpoints: Endpoints {
            base_url,
            enquire_path: config
                .api
                .enquire_path
                .clone()
                .unwrap_or_else(|| DEFAULT_ENQUIRE_PATH.to_string()),
            messages_path: config
                .api
                .messages_path
                .clone()
                .unwrap_or_else(|| DEFAULT_MESSAGES_PATH.to_string()),
        },
        request_timeout: config.api.request_timeout_secs.map(Duration::from_secs),
        token,
        hotels: config.hotels.clone(),
    }
}

/// Token: env → config. Blank means signed out.
fn resolve_token(env: Option<String>, file: Option<&str>) -> Option<AuthToken> {
    env.or_else(|| file.map(str::to_string))
        .and_then(AuthToken::new)
}
