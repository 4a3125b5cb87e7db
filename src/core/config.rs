//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sabi/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! RPC credentials never live in the file; they come from the
//! environment (`SABI_RPC_USER` / `SABI_RPC_PASSWORD`, `.env` supported).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SabiConfig {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RpcConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_wallet: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:37128";
pub const DEFAULT_WALLET: &str = "Wallet 1";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub wallet: String,
    pub rpc_user: Option<String>,
    pub rpc_password: Option<String>,
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

/// Returns the path to `~/.sabi/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sabi").join("config.toml"))
}

/// Load config from `~/.sabi/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SabiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SabiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SabiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SabiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SabiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# sabi Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [rpc]
# endpoint = "http://127.0.0.1:37128"   # Or set SABI_RPC_ENDPOINT env var

# [general]
# default_wallet = "Wallet 1"

# RPC credentials are never read from this file. If the daemon requires
# them, set SABI_RPC_USER and SABI_RPC_PASSWORD in the environment or in
# a .env file next to the binary.
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

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_endpoint` and `cli_wallet` are from CLI flags (None = not given).
pub fn resolve(
    config: &SabiConfig,
    cli_endpoint: Option<&str>,
    cli_wallet: Option<&str>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SABI_RPC_ENDPOINT").ok())
        .or_else(|| config.rpc.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Trailing slash would double up in "{base}/{wallet}" endpoints.
    let endpoint = endpoint.trim_end_matches('/').to_string();

    // Wallet: CLI → env → config → default
    let wallet = cli_wallet
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SABI_WALLET").ok())
        .or_else(|| config.general.default_wallet.clone())
        .unwrap_or_else(|| DEFAULT_WALLET.to_string());

    // Credentials: env only
    let rpc_user = std::env::var("SABI_RPC_USER").ok();
    let rpc_password = std::env::var("SABI_RPC_PASSWORD").ok();

    ResolvedConfig {
        endpoint,
        wallet,
        rpc_user,
        rpc_password,
    }
}
