//! Route network configuration
//!
//! Configuration is an optional TOML file; every section and key may be
//! omitted.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{RouteError, Result};

pub use types::{ListingConfig, NetworkConfig, SearchConfig, CONFIG_FORMAT_VERSION};

impl NetworkConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NetworkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), max_settled = ?config.search.max_settled, "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RouteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that cannot be honoured
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if self.search.max_settled == Some(0) {
            bail_invalid!("search.max_settled", 0);
        }
        Ok(())
    }
}
