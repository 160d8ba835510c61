use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::content::{PersonaVoice, ReadingLevelMode};
use crate::trending::TRENDING_TOPICS;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Mode and persona used when the caller does not pick one
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Trending topics settings
    #[serde(default)]
    pub trending: TrendingConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Default selections
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub mode: ReadingLevelMode,

    #[serde(default)]
    pub persona: PersonaVoice,
}

/// Generation service configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Simulated latency before a result is returned, in milliseconds
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

/// Trending topics configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrendingConfig {
    /// How many trending topics to show at once
    #[serde(default = "default_trending_sample_size")]
    pub sample_size: usize,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            sample_size: default_trending_sample_size(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Upper bound on the simulated delay, in milliseconds
pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

fn default_simulated_delay_ms() -> u64 {
    crate::generation::service::DEFAULT_SIMULATED_DELAY_MS
}

fn default_trending_sample_size() -> usize {
    5
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.generation.simulated_delay_ms > MAX_SIMULATED_DELAY_MS {
            return Err(anyhow!(
                "Simulated delay of {} ms exceeds the maximum of {} ms",
                self.generation.simulated_delay_ms,
                MAX_SIMULATED_DELAY_MS
            ));
        }

        let max_sample = TRENDING_TOPICS.len();
        if self.trending.sample_size == 0 || self.trending.sample_size > max_sample {
            return Err(anyhow!(
                "Trending sample size must be between 1 and {}, got {}",
                max_sample,
                self.trending.sample_size
            ));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            defaults: DefaultsConfig::default(),
            generation: GenerationConfig::default(),
            trending: TrendingConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
