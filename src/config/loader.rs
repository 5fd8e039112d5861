//! Configuration Loader
//!
//! Loads and validates analysis settings from a TOML file. Every section and
//! every key is optional; missing values take the library defaults.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::analysis::AnalysisConfig;
use crate::domain::{SignificanceLevel, SpreadType};
use crate::stats::KalmanConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub kalman: KalmanSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Analysis configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// "1%", "5%" or "10%"
    pub significance: SignificanceLevel,
    /// "static" (OLS) or "dynamic" (Kalman)
    pub spread_type: SpreadType,
    /// Look-back for the spread z-score
    pub zscore_window: usize,
    /// Look-back for rolling cointegration and correlation
    pub rolling_window: usize,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        let defaults = AnalysisConfig::default();
        Self {
            significance: defaults.significance,
            spread_type: defaults.spread_type,
            zscore_window: defaults.zscore_window,
            rolling_window: defaults.rolling_window,
        }
    }
}

/// Kalman filter section for the dynamic spread
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KalmanSection {
    pub process_noise: f64,
    pub observation_noise: f64,
    pub initial_variance: f64,
    pub initial_beta: f64,
}

impl Default for KalmanSection {
    fn default() -> Self {
        let defaults = KalmanConfig::default();
        Self {
            process_noise: defaults.process_noise,
            observation_noise: defaults.observation_noise,
            initial_variance: defaults.initial_variance,
            initial_beta: defaults.initial_beta,
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        AnalysisConfig::from(self)
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

impl From<&KalmanSection> for KalmanConfig {
    fn from(section: &KalmanSection) -> Self {
        KalmanConfig {
            process_noise: section.process_noise,
            observation_noise: section.observation_noise,
            initial_variance: section.initial_variance,
            initial_beta: section.initial_beta,
        }
    }
}

impl From<&Config> for AnalysisConfig {
    fn from(config: &Config) -> Self {
        AnalysisConfig {
            significance: config.analysis.significance,
            spread_type: config.analysis.spread_type,
            zscore_window: config.analysis.zscore_window,
            rolling_window: config.analysis.rolling_window,
            kalman: KalmanConfig::from(&config.kalman),
        }
    }
}
