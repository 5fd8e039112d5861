//! Domain Layer - Core types for cointegration diagnostics
//!
//! Pure data and error types with no dependency on the statistics routines.
//! The routines themselves sit behind the ports layer.

pub mod error;
pub mod extended_float;
pub mod models;

pub use error::{CointError, FitError};
pub use models::{
    CointTest, CointegrationResult, CriticalValues, HedgeFit, RegressionFit, SignificanceLevel,
    SpreadType,
};
