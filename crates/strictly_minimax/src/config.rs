//! Search configuration.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the alpha-beta window is handled across the root's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootWindow {
    /// The window tightens as root children are searched, exactly as at
    /// inner nodes.
    #[default]
    Threaded,
    /// Every root child is searched with the full window, yielding its
    /// exact value.
    Full,
}

/// Configuration for a [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Window policy at the root.
    #[serde(default)]
    root_window: RootWindow,
}

impl SearchConfig {
    /// Creates a configuration with the given root window policy.
    #[instrument]
    pub fn new(root_window: RootWindow) -> Self {
        Self { root_window }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(root_window = ?config.root_window, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(root_window = ?config.root_window, "Config loaded successfully");
        Ok(config)
    }
}
