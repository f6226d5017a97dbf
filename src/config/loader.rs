//! Configuration loading and merging logic
//!
//! Handles loading configuration from the config file and layering
//! environment overrides on top.

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // HELMVIZ_HELM_BIN override
        if let Ok(binary) = std::env::var("HELMVIZ_HELM_BIN") {
            config.helm.binary = binary;
        }

        // HELMVIZ_TIMEOUT override
        if let Ok(timeout) = std::env::var("HELMVIZ_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(val) => config.helm.timeout_seconds = val,
                Err(_) => tracing::warn!("Ignoring invalid HELMVIZ_TIMEOUT: {}", timeout),
            }
        }

        // HELMVIZ_NO_ICONS override
        if let Ok(no_icons) = std::env::var("HELMVIZ_NO_ICONS") {
            if let Ok(val) = no_icons.parse::<bool>() {
                config.ui.no_icons = val;
            }
        }

        // https://no-color.org: any value disables color
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.ui.no_color = true;
        }

        config
    }
}
