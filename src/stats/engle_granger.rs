//! Engle-Granger Two-Step Cointegration Test
//!
//! 1. OLS of `y` on `x` with a constant
//! 2. Dickey-Fuller test on the residuals, read against MacKinnon tables for
//!    two variables
//!
//! Near-perfect collinearity leaves nothing to test: the residuals are
//! numerical noise. That case is reported as a statistic of -inf (p-value 0).

use tracing::{debug, warn};

use super::adf::{self, dickey_fuller_statistic};
use super::mackinnon;
use super::regression::OrdinaryLeastSquares;
use crate::domain::{CointTest, FitError};
use crate::ports::{CointegrationTest, LinearRegression};

/// Series in the cointegrating regression (y and one regressor)
const PAIR_VARIABLES: usize = 2;

/// Engle-Granger test backed by a linear regression routine
#[derive(Debug, Clone)]
pub struct EngleGranger<R = OrdinaryLeastSquares> {
    regression: R,
}

impl EngleGranger {
    /// Engle-Granger test on top of the built-in OLS estimator
    pub fn new() -> Self {
        Self {
            regression: OrdinaryLeastSquares,
        }
    }
}

impl Default for EngleGranger {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LinearRegression> EngleGranger<R> {
    pub fn with_regression(regression: R) -> Self {
        Self { regression }
    }
}

/// r-squared above which the pair is treated as collinear
fn collinearity_threshold() -> f64 {
    1.0 - 100.0 * f64::EPSILON.sqrt()
}

impl<R: LinearRegression> CointegrationTest for EngleGranger<R> {
    fn test(&self, y: &[f64], x: &[f64]) -> Result<CointTest, FitError> {
        if y.len() != x.len() {
            return Err(FitError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if y.len() < adf::MIN_OBSERVATIONS {
            return Err(FitError::InsufficientObservations {
                required: adf::MIN_OBSERVATIONS,
                actual: y.len(),
            });
        }

        let fit = self.regression.fit(x, y)?;

        let test_statistic = if fit.r_squared < collinearity_threshold() {
            dickey_fuller_statistic(&fit.residuals)?
        } else {
            warn!(
                r_squared = fit.r_squared,
                "Series are (almost) perfectly collinear, cointegration test is not reliable"
            );
            f64::NEG_INFINITY
        };

        let p_value = mackinnon::p_value(test_statistic, PAIR_VARIABLES)?;
        let critical_values = mackinnon::critical_values(PAIR_VARIABLES, y.len() - 1)?;

        debug!(
            test_statistic,
            p_value,
            critical_5pct = critical_values.five_pct,
            nobs = y.len(),
            "Engle-Granger test"
        );

        Ok(CointTest {
            test_statistic,
            p_value,
            critical_values,
        })
    }
}
