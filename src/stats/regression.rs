//! Ordinary Least Squares
//!
//! Simple linear regression `y = beta_0 + beta_1 * x` plus the usual fit
//! diagnostics:
//! - t and p-values of both coefficients (Student's t, n - 2 dof)
//! - F-statistic of the regression (Fisher-Snedecor, 1 and n - 2 dof)
//! - R-squared and standard error of the estimate

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::domain::{FitError, RegressionFit};
use crate::ports::LinearRegression;

/// Minimum observations for a regression line
const MIN_OBSERVATIONS: usize = 2;

/// OLS estimator for a single regressor with intercept
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinaryLeastSquares;

impl LinearRegression for OrdinaryLeastSquares {
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<RegressionFit, FitError> {
        simple_linear_regression(x, y)
    }
}

/// t-statistic and two-sided p-value of one coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTest {
    pub t_stat: f64,
    pub p_value: f64,
}

/// Significance of intercept and slope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTests {
    pub intercept: CoefficientTest,
    pub slope: CoefficientTest,
}

/// Validate a pair of regression inputs
pub(crate) fn check_inputs(x: &[f64], y: &[f64], required: usize) -> Result<(), FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < required {
        return Err(FitError::InsufficientObservations {
            required,
            actual: x.len(),
        });
    }
    if let Some(idx) = x.iter().chain(y.iter()).position(|v| !v.is_finite()) {
        return Err(FitError::NonFinite(idx % x.len()));
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Fit `y = beta_0 + beta_1 * x` by least squares
///
/// Uses centred sums. Fails with `SingularDesign` when the spread of `x` is
/// within machine precision of its magnitude.
pub fn simple_linear_regression(x: &[f64], y: &[f64]) -> Result<RegressionFit, FitError> {
    check_inputs(x, y, MIN_OBSERVATIONS)?;

    let n = x.len();
    let x_bar = mean(x);
    let y_bar = mean(y);

    let sxx: f64 = x.iter().map(|&x_i| (x_i - x_bar) * (x_i - x_bar)).sum();
    let scale: f64 = x.iter().map(|&x_i| x_i * x_i).sum();
    if sxx <= f64::EPSILON * scale {
        return Err(FitError::SingularDesign);
    }

    let sxy: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&x_i, &y_i)| (x_i - x_bar) * (y_i - y_bar))
        .sum();

    let slope = sxy / sxx;
    let intercept = y_bar - slope * x_bar;

    let residuals = calculate_residuals(x, y, intercept, slope);
    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    let sst: f64 = y.iter().map(|&y_i| (y_i - y_bar).powi(2)).sum();

    // A flat y is fitted exactly by the intercept
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };
    let std_error = if n > 2 {
        (sse / (n - 2) as f64).sqrt()
    } else {
        f64::NAN
    };

    Ok(RegressionFit {
        intercept,
        slope,
        residuals,
        r_squared,
        std_error,
    })
}

/// Differences between actual and predicted values
pub fn calculate_residuals(x: &[f64], y: &[f64], beta_0: f64, beta_1: f64) -> Vec<f64> {
    x.iter()
        .zip(y.iter())
        .map(|(&x_i, &y_i)| y_i - (beta_0 + beta_1 * x_i))
        .collect()
}

/// t and p-values for intercept and slope of a fitted regression
///
/// A slope p-value below 0.05 means x has a significant effect on y.
pub fn coefficient_tests(x: &[f64], fit: &RegressionFit) -> Result<CoefficientTests, FitError> {
    let n = x.len();
    if n <= 2 {
        return Err(FitError::InsufficientObservations {
            required: 3,
            actual: n,
        });
    }

    let n_f = n as f64;
    let x_bar = mean(x);
    let sxx: f64 = x.iter().map(|&x_i| (x_i - x_bar).powi(2)).sum();

    let se_intercept = fit.std_error * (1.0 / n_f + x_bar.powi(2) / sxx).sqrt();
    let se_slope = fit.std_error / sxx.sqrt();

    let t_dist = StudentsT::new(0.0, 1.0, n_f - 2.0)
        .map_err(|e| FitError::Distribution(e.to_string()))?;
    let two_sided = |t: f64| 2.0 * (1.0 - t_dist.cdf(t.abs()));

    let t_intercept = fit.intercept / se_intercept;
    let t_slope = fit.slope / se_slope;

    Ok(CoefficientTests {
        intercept: CoefficientTest {
            t_stat: t_intercept,
            p_value: two_sided(t_intercept),
        },
        slope: CoefficientTest {
            t_stat: t_slope,
            p_value: two_sided(t_slope),
        },
    })
}

/// F-statistic and its p-value
///
/// Indicates whether there is any relationship between predictor and response.
pub fn f_statistic(y: &[f64], fit: &RegressionFit) -> Result<(f64, f64), FitError> {
    let n = y.len();
    if n <= 2 {
        return Err(FitError::InsufficientObservations {
            required: 3,
            actual: n,
        });
    }

    let p = 1.0; // single regressor
    let dof = n as f64 - p - 1.0;
    let y_bar = mean(y);
    let tss: f64 = y.iter().map(|&y_i| (y_i - y_bar).powi(2)).sum();
    let rss: f64 = fit.residuals.iter().map(|r| r * r).sum();

    let f_stat = ((tss - rss) / p) / (rss / dof);

    let f_dist =
        FisherSnedecor::new(p, dof).map_err(|e| FitError::Distribution(e.to_string()))?;
    // Exact fit of a varying y gives +inf; a flat y gives 0/0 and no verdict
    let p_value = if f_stat.is_nan() {
        f64::NAN
    } else if f_stat == f64::INFINITY {
        0.0
    } else {
        1.0 - f_dist.cdf(f_stat)
    };

    Ok((f_stat, p_value))
}
