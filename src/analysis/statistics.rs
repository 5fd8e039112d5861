//! Pair Statistics
//!
//! Everything needed to judge a pair in one pass: cointegration test,
//! correlation, spread and hedge ratio, half-life, rolling z-score of the
//! spread, rolling cointegration and rolling correlation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use super::half_life::half_life_mean_reversion;
use super::params::AnalysisConfig;
use super::rolling::{pearson_correlation, rolling_cointegration, rolling_correlation, rolling_zscore};
use super::spread::{spread_dynamic, spread_static};
use crate::domain::{CointError, CointTest, SpreadType};
use crate::ports::CointegrationTest;
use crate::stats::EngleGranger;

/// Diagnostics bundle for a pair of series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairStatistics {
    pub coint: CointTest,
    pub is_cointegrated: bool,
    pub corr: f64,
    pub half_life: f64,
    pub hedge_ratio: f64,
    pub spread: Vec<f64>,
    pub zscore: Vec<f64>,
    /// +inf where a window is collinear
    #[serde(with = "crate::domain::extended_float::vec")]
    pub coint_roll: Vec<f64>,
    pub corr_roll: Vec<f64>,
}

impl PairStatistics {
    /// Calculate the bundle for `series_0` against `series_1`
    pub fn calculate(
        series_0: &[f64],
        series_1: &[f64],
        config: &AnalysisConfig,
    ) -> Result<Self, CointError> {
        let _span = info_span!("pair_statistics", n = series_0.len()).entered();

        config
            .validate()
            .map_err(|e| CointError::InvalidInput(e.to_string()))?;

        if series_0.is_empty() || series_1.is_empty() {
            return Err(CointError::InvalidInput("series length zero".to_string()));
        }

        let test = EngleGranger::new();

        let coint = test.test(series_0, series_1)?;
        let is_cointegrated = coint.is_cointegrated(config.significance);

        let corr = pearson_correlation(series_0, series_1)?;

        let (spread, hedge_ratio) = match config.spread_type {
            SpreadType::Static => {
                let (spread, hedge) = spread_static(series_0, series_1)?;
                (spread, hedge.hedge_ratio)
            }
            SpreadType::Dynamic => spread_dynamic(series_0, series_1, &config.kalman)?,
        };

        let half_life = half_life_mean_reversion(&spread)?;
        let zscore = rolling_zscore(&spread, config.zscore_window)?;
        let coint_roll = rolling_cointegration(
            &test,
            series_0,
            series_1,
            config.rolling_window,
            config.significance,
        )?;
        let corr_roll = rolling_correlation(series_0, series_1, config.rolling_window)?;

        debug!(
            is_cointegrated,
            corr,
            hedge_ratio,
            half_life,
            spread_type = ?config.spread_type,
            "Pair statistics calculated"
        );

        Ok(Self {
            coint,
            is_cointegrated,
            corr,
            half_life,
            hedge_ratio,
            spread,
            zscore,
            coint_roll,
            corr_roll,
        })
    }

    /// Most recent spread z-score
    pub fn latest_zscore(&self) -> Option<f64> {
        self.zscore.last().copied()
    }
}
