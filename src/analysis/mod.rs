//! Analysis Layer - Cointegration diagnostics for a pair of series
//!
//! - `cointegration`: the core pipeline (test, hedge fit, spread, half-life)
//! - `half_life`: mean-reversion slope and half-life of a single series
//! - `spread`: static and Kalman-filtered spreads
//! - `rolling`: correlation, rolling z-score, rolling cointegration
//! - `params`: settings for the pair statistics bundle
//! - `statistics`: the pair statistics bundle

pub mod cointegration;
pub mod half_life;
pub mod params;
pub mod rolling;
pub mod spread;
pub mod statistics;

pub use cointegration::{calculate_cointegration, CointegrationAnalyzer};
pub use half_life::{
    half_life_mean_reversion, half_life_with, mean_reversion_slope, mean_reversion_slope_with,
};
pub use params::{AnalysisConfig, ParamsError};
pub use rolling::{pearson_correlation, rolling_cointegration, rolling_correlation, rolling_zscore};
pub use spread::{dynamic_hedge_ratios, hedge_ratio_static_with, spread_dynamic, spread_static};
pub use statistics::PairStatistics;
