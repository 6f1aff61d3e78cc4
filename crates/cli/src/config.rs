//! Persisted CLI preferences.
//!
//! The core crates keep no state beyond the in-memory session; remembering
//! the last-selected network and endpoint override across invocations is a
//! configuration concern that lives here.

use anyhow::{Context, Result};
use parthenon_types::network::NetworkKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk CLI preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Last-selected network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkKey>,
    /// Endpoint URL override, when the user pinned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_override: Option<String>,
}

impl WalletConfig {
    /// Default config file location (`~/.parthenon/wallet.toml`).
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".parthenon").join("wallet.toml"))
    }

    /// Loads preferences from `path`; a missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Loads preferences from the default location, when one exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Writes preferences to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("failed to encode config")?;
        fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Saves preferences to the default location, when one exists.
    pub fn save_default(&self) -> Result<()> {
        match Self::default_path() {
            Some(path) => self.save(&path),
            None => Ok(()),
        }
    }
}
