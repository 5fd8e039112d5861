//! Spread Construction
//!
//! Static spread from a single OLS hedge ratio, or dynamic spread from a
//! Kalman-filtered hedge ratio per observation.

use tracing::{debug, warn};

use super::cointegration::ensure_same_length;
use crate::domain::{CointError, HedgeFit};
use crate::ports::LinearRegression;
use crate::stats::{KalmanConfig, KalmanHedgeRatio, OrdinaryLeastSquares};

/// Static hedge fit of series_0 on series_1 with the given regression routine
pub fn hedge_ratio_static_with<R>(
    regression: &R,
    series_0: &[f64],
    series_1: &[f64],
) -> Result<HedgeFit, CointError>
where
    R: LinearRegression + ?Sized,
{
    ensure_same_length(series_0, series_1)?;
    let fit = regression.fit(series_1, series_0)?;
    Ok(HedgeFit {
        hedge_ratio: fit.slope,
        intercept: fit.intercept,
    })
}

/// `series_0 - hedge_ratio * series_1 - intercept` with an OLS hedge fit
pub fn spread_static(series_0: &[f64], series_1: &[f64]) -> Result<(Vec<f64>, HedgeFit), CointError> {
    let hedge = hedge_ratio_static_with(&OrdinaryLeastSquares, series_0, series_1)?;
    let spread = series_0
        .iter()
        .zip(series_1.iter())
        .map(|(&leg_0, &leg_1)| hedge.spread_at(leg_0, leg_1))
        .collect();
    Ok((spread, hedge))
}

/// Per-observation hedge ratios from the price ratio of the two legs
pub fn dynamic_hedge_ratios(
    series_0: &[f64],
    series_1: &[f64],
    config: &KalmanConfig,
) -> Result<Vec<f64>, CointError> {
    ensure_same_length(series_0, series_1)?;
    if let Some(idx) = series_1.iter().position(|&v| v == 0.0) {
        return Err(CointError::InvalidInput(format!(
            "series_1 is zero at index {}, price ratio undefined",
            idx
        )));
    }

    let mut kalman = KalmanHedgeRatio::new(config);
    let betas: Vec<f64> = series_0
        .iter()
        .zip(series_1.iter())
        .map(|(&leg_0, &leg_1)| kalman.update(leg_0 / leg_1))
        .collect();

    // Non-finite ratios are skipped by the filter
    let skipped = betas.len() as u64 - kalman.update_count();
    if skipped > 0 {
        warn!(skipped, "Non-finite price ratios skipped by the hedge ratio filter");
    }
    debug!(
        updates = kalman.update_count(),
        beta = kalman.beta(),
        variance = kalman.variance(),
        "Dynamic hedge ratio filtered"
    );

    Ok(betas)
}

/// `series_0[t] - β[t] * series_1[t]` and the last β
pub fn spread_dynamic(
    series_0: &[f64],
    series_1: &[f64],
    config: &KalmanConfig,
) -> Result<(Vec<f64>, f64), CointError> {
    let betas = dynamic_hedge_ratios(series_0, series_1, config)?;

    let spread = series_0
        .iter()
        .zip(series_1.iter())
        .zip(betas.iter())
        .map(|((&leg_0, &leg_1), &beta)| leg_0 - beta * leg_1)
        .collect();

    let hedge_ratio = betas.last().copied().unwrap_or(config.initial_beta);
    Ok((spread, hedge_ratio))
}
