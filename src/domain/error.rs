//! Error Types
//!
//! Typed failures for the cointegration pipeline. `FitError` belongs to the
//! statistical routines behind the ports; `CointError` is what callers of the
//! analysis layer see.

use thiserror::Error;

/// Failures raised by a regression or cointegration test routine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    /// x and y do not have the same number of observations
    #[error("Input vectors have different sizes: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Not enough observations for the requested fit
    #[error("Insufficient observations: requires {required}, got {actual}")]
    InsufficientObservations { required: usize, actual: usize },

    /// The regressor has (numerically) zero variance
    #[error("Singular design: the variance of the regressor is zero")]
    SingularDesign,

    /// NaN or infinite input value
    #[error("Non-finite value at index {0}")]
    NonFinite(usize),

    /// A reference distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Errors returned by half-life and cointegration calculations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CointError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Estimated mean reversion slope cannot be inverted into a half-life
    #[error("Slope too close to zero, half-life undefined (slope = {slope:e})")]
    DegenerateFit { slope: f64 },

    #[error("Series lengths differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Failure inside the regression or cointegration test routine, unchanged
    #[error("Underlying fit failed: {0}")]
    UnderlyingFitFailure(#[from] FitError),

    #[error("Window size {window} is invalid for series of length {len}")]
    InvalidWindow { window: usize, len: usize },

    #[error("Standard deviation is zero: {0}")]
    ZeroVariance(String),
}

impl CointError {
    /// Check whether the error came from the statistics routines rather than
    /// from input validation
    pub fn is_fit_failure(&self) -> bool {
        matches!(
            self,
            CointError::UnderlyingFitFailure(_) | CointError::DegenerateFit { .. }
        )
    }
}
