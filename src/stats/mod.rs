//! Statistics Layer - Built-in implementations of the ports
//!
//! - `regression`: OLS with coefficient, F and R-squared diagnostics
//! - `adf`: Dickey-Fuller t-statistic on a residual series
//! - `mackinnon`: p-values and critical values for Dickey-Fuller statistics
//! - `engle_granger`: two-step cointegration test
//! - `kalman`: scalar Kalman filter for a drifting hedge ratio

pub mod adf;
pub mod engle_granger;
pub mod kalman;
pub mod mackinnon;
pub mod regression;

pub use adf::dickey_fuller_statistic;
pub use engle_granger::EngleGranger;
pub use kalman::{KalmanConfig, KalmanHedgeRatio};
pub use regression::{
    coefficient_tests, f_statistic, simple_linear_regression, CoefficientTest, CoefficientTests,
    OrdinaryLeastSquares,
};
