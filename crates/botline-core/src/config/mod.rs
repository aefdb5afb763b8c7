mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BotError;
use defaults::*;

/// Top-level botline configuration, read by the command-line tool.
///
/// The client library never loads this on its own; callers hand the
/// credential to the client explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Credential and endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub token: String,
    /// API root without the `/bot<token>` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Log every raw response body at info level.
    #[serde(default)]
    pub debug: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            debug: false,
        }
    }
}

/// Parameters used by `poll_next`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
    /// Update kinds to receive. Empty = whatever the server currently sends.
    #[serde(default)]
    pub allowed_updates: Vec<String>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            allowed_updates: Vec::new(),
        }
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, BotError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| BotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, BotError> {
    toml::from_str(content).map_err(|e| BotError::Config(format!("failed to parse config: {}", e)))
}
