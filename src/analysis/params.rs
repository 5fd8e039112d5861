//! Analysis Parameters
//!
//! Settings for the full pair statistics bundle. The core
//! `calculate_cointegration` call only uses the significance level.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{SignificanceLevel, SpreadType};
use crate::stats::KalmanConfig;

/// Parameter validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("Invalid z-score window: {0} (must be >= 2)")]
    InvalidZScoreWindow(usize),

    #[error("Invalid rolling window: {0} (must be >= 3)")]
    InvalidRollingWindow(usize),

    #[error("Invalid Kalman parameters: {0}")]
    InvalidKalman(String),
}

/// Pair statistics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Level used for the cointegration decision
    pub significance: SignificanceLevel,
    /// Static OLS or dynamic Kalman hedge ratio
    pub spread_type: SpreadType,
    /// Look-back for the spread z-score
    pub zscore_window: usize,
    /// Look-back for rolling cointegration and correlation
    pub rolling_window: usize,
    /// Filter settings for the dynamic spread
    pub kalman: KalmanConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            significance: SignificanceLevel::FivePercent,
            spread_type: SpreadType::Static,
            zscore_window: 21,
            rolling_window: 60,
            kalman: KalmanConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_spread_type(mut self, spread_type: SpreadType) -> Self {
        self.spread_type = spread_type;
        self
    }

    pub fn with_windows(mut self, zscore_window: usize, rolling_window: usize) -> Self {
        self.zscore_window = zscore_window;
        self.rolling_window = rolling_window;
        self
    }

    pub fn with_significance(mut self, significance: SignificanceLevel) -> Self {
        self.significance = significance;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.zscore_window < 2 {
            return Err(ParamsError::InvalidZScoreWindow(self.zscore_window));
        }
        // Engle-Granger needs three observations per window
        if self.rolling_window < 3 {
            return Err(ParamsError::InvalidRollingWindow(self.rolling_window));
        }
        self.kalman.validate().map_err(ParamsError::InvalidKalman)?;
        Ok(())
    }
}
