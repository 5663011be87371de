// Startup configuration. The broker endpoint comes from a single JSON
// file read once per invocation; a missing or malformed file aborts the
// process, since every command needs the endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `~/.kap/config`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "brokerUrl")]
    pub broker_url: String,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Fixed config location: `.kap/config` under the user's home
    /// directory, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.join(".kap").join("config")
    }
}
