//! Regression Port
//!
//! Seam for the simple linear regression routine used to estimate hedge
//! ratios and mean reversion slopes.

use crate::domain::{FitError, RegressionFit};

/// Simple linear regression of `y` on `x` with an intercept
#[cfg_attr(test, mockall::automock)]
pub trait LinearRegression {
    /// Fit `y = intercept + slope * x`
    ///
    /// Implementations must return residuals in input order and fail with
    /// `FitError::SingularDesign` when `x` has no variance.
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<RegressionFit, FitError>;
}
