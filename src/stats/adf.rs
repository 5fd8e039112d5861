//! Dickey-Fuller Statistic
//!
//! Regresses first differences on lagged levels without a constant,
//! `Δe[t] = γ * e[t-1] + ε[t]`, and returns the t-statistic of γ. Applied to
//! OLS residuals, which are already centred, so no deterministic term is fitted.

use crate::domain::FitError;

/// Minimum series length: two differences leave one degree of freedom
pub const MIN_OBSERVATIONS: usize = 3;

/// t-statistic of the lagged level in the Dickey-Fuller regression
///
/// More negative means stronger evidence against a unit root.
pub fn dickey_fuller_statistic(series: &[f64]) -> Result<f64, FitError> {
    if series.len() < MIN_OBSERVATIONS {
        return Err(FitError::InsufficientObservations {
            required: MIN_OBSERVATIONS,
            actual: series.len(),
        });
    }
    if let Some(idx) = series.iter().position(|v| !v.is_finite()) {
        return Err(FitError::NonFinite(idx));
    }

    let lagged = &series[..series.len() - 1];
    let diffs: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();

    let sxx: f64 = lagged.iter().map(|x| x * x).sum();
    if sxx <= f64::EPSILON * f64::EPSILON {
        return Err(FitError::SingularDesign);
    }
    let sxy: f64 = lagged.iter().zip(diffs.iter()).map(|(x, y)| x * y).sum();
    let gamma = sxy / sxx;

    let sse: f64 = lagged
        .iter()
        .zip(diffs.iter())
        .map(|(x, y)| (y - gamma * x).powi(2))
        .sum();
    let dof = (diffs.len() - 1) as f64;
    let std_error = (sse / dof / sxx).sqrt();

    Ok(gamma / std_error)
}
