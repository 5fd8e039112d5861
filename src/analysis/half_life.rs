//! Mean Reversion Half-Life
//!
//! Fits the discrete version of dX = θ(μ - X)dt by regressing first
//! differences on lagged levels:
//!
//! ```text
//! x[t+1] - x[t] = a + θ * x[t] + ε
//! half_life = -ln(2) / θ
//! ```
//!
//! A negative θ means the series pulls back towards its mean; the half-life is
//! then positive and measured in sampling intervals.

use tracing::debug;

use crate::domain::{CointError, FitError};
use crate::ports::LinearRegression;
use crate::stats::OrdinaryLeastSquares;

/// Slope θ of differences on lagged levels
pub fn mean_reversion_slope_with<R>(regression: &R, series: &[f64]) -> Result<f64, CointError>
where
    R: LinearRegression + ?Sized,
{
    if series.len() <= 1 {
        return Err(CointError::InvalidInput(
            "series length must exceed 1".to_string(),
        ));
    }

    let difference: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let lagged = &series[..series.len() - 1];

    match regression.fit(lagged, &difference) {
        Ok(fit) => Ok(fit.slope),
        // A flat lagged series carries no slope at all
        Err(FitError::SingularDesign) => Err(CointError::DegenerateFit { slope: 0.0 }),
        Err(e) => Err(e.into()),
    }
}

/// Half-life of mean reversion using the given regression routine
pub fn half_life_with<R>(regression: &R, series: &[f64]) -> Result<f64, CointError>
where
    R: LinearRegression + ?Sized,
{
    let slope = mean_reversion_slope_with(regression, series)?;

    if slope.abs() < f64::EPSILON {
        return Err(CointError::DegenerateFit { slope });
    }

    let half_life = -std::f64::consts::LN_2 / slope;
    debug!(slope, half_life, n = series.len(), "Half-life estimated");
    Ok(half_life)
}

/// Slope θ of differences on lagged levels, fitted by OLS
pub fn mean_reversion_slope(series: &[f64]) -> Result<f64, CointError> {
    mean_reversion_slope_with(&OrdinaryLeastSquares, series)
}

/// Time for a deviation to decay to half its size, in sampling intervals
///
/// # Errors
/// - `InvalidInput` when the series has fewer than two points
/// - `DegenerateFit` when the fitted slope is within machine epsilon of zero
/// - `UnderlyingFitFailure` for any other regression failure
pub fn half_life_mean_reversion(series: &[f64]) -> Result<f64, CointError> {
    half_life_with(&OrdinaryLeastSquares, series)
}
