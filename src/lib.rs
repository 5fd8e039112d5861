//! pairs-coint - Cointegration diagnostics for pairs trading
//!
//! Tests whether two price series are cointegrated (Engle-Granger), estimates
//! the hedge ratio relating them and measures how fast their spread reverts.
//!
//! # Modules
//!
//! - `domain`: Result and error types (CointegrationResult, CointTest, CointError)
//! - `ports`: Trait abstractions (LinearRegression, CointegrationTest)
//! - `stats`: Built-in routines (OLS, Dickey-Fuller, MacKinnon, Engle-Granger, Kalman)
//! - `analysis`: Cointegration pipeline, half-life, spreads and pair statistics
//! - `config`: Configuration loading and validation
//! - `adapters`: Command-line interface and JSON input
//!
//! # Example
//!
//! ```
//! use pairs_coint::{calculate_cointegration, CointError};
//!
//! let series_2: Vec<f64> = (0..100).map(|i| 10.0 + (i as f64 * 0.3).sin() + i as f64 * 0.02).collect();
//! let series_1: Vec<f64> = series_2
//!     .iter()
//!     .enumerate()
//!     .map(|(i, v)| 2.0 * v + 1.0 + if i % 2 == 0 { 0.05 } else { -0.05 })
//!     .collect();
//!
//! let result = calculate_cointegration(&series_1, &series_2)?;
//! assert!(result.is_cointegrated);
//! assert!((result.hedge_ratio - 2.0).abs() < 0.01);
//! # Ok::<(), CointError>(())
//! ```

pub mod adapters;
pub mod analysis;
pub mod config;
pub mod domain;
pub mod ports;
pub mod stats;

pub use analysis::{
    calculate_cointegration, half_life_mean_reversion, AnalysisConfig, CointegrationAnalyzer,
    PairStatistics,
};
pub use domain::{CointError, CointTest, CointegrationResult, FitError, SignificanceLevel};
pub use ports::{CointegrationTest, LinearRegression};
pub use stats::{EngleGranger, OrdinaryLeastSquares};
