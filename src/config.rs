//! Driver configuration loaded from an optional TOML file.
//!
//! Every field has a default, so a missing file or a partial file both work:
//!
//! ```toml
//! withdrawal_amount = 378
//! denominations = [100, 50, 20, 10, 5, 1]
//! log_level = "warn"
//!
//! [traffic_light]
//! tick_ms = 500
//! cycles = 2
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub withdrawal_amount: u32,
    pub denominations: Vec<u32>,
    pub log_level: String,
    pub traffic_light: TrafficLightConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrafficLightConfig {
    pub tick_ms: u64,
    pub cycles: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            withdrawal_amount: 378,
            denominations: vec![100, 50, 20, 10, 5, 1],
            log_level: "warn".to_string(),
            traffic_light: TrafficLightConfig::default(),
        }
    }
}

impl Default for TrafficLightConfig {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            cycles: 2,
        }
    }
}

impl TrafficLightConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl DemoConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Loads from `$PATTERNS_CONFIG`, else `./patterns.toml`, else defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_or_default(Path::new(&path))
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.denominations.is_empty() {
            return Err(ConfigError::invalid("denominations", "must not be empty"));
        }
        if self.denominations.contains(&0) {
            return Err(ConfigError::invalid("denominations", "bills must be greater than 0"));
        }
        if self.traffic_light.tick_ms == 0 {
            return Err(ConfigError::invalid("traffic_light.tick_ms", "must be greater than 0"));
        }
        Ok(())
    }
}
