//! Cointegration Pipeline
//!
//! Single pass over a pair of series:
//! 1. Engle-Granger test on (series_1, series_2)
//! 2. OLS hedge fit `series_1 ≈ intercept + hedge_ratio * series_2`
//! 3. Spread `series_1 - hedge_ratio * series_2 - intercept`
//! 4. Half-life of the spread
//! 5. Flag = p-value below alpha AND statistic below the critical value
//!
//! Any failure aborts the call; there are no partial results.

use tracing::debug;

use super::half_life::half_life_with;
use crate::domain::{CointError, CointegrationResult, HedgeFit, SignificanceLevel};
use crate::ports::{CointegrationTest, LinearRegression};
use crate::stats::{EngleGranger, OrdinaryLeastSquares};

/// Pipeline over a regression routine and a cointegration test
#[derive(Debug, Clone)]
pub struct CointegrationAnalyzer<R = OrdinaryLeastSquares, T = EngleGranger> {
    regression: R,
    test: T,
    significance: SignificanceLevel,
}

impl CointegrationAnalyzer {
    /// Analyzer on the built-in OLS and Engle-Granger routines at 5%
    pub fn new() -> Self {
        Self::with_routines(OrdinaryLeastSquares, EngleGranger::new())
    }
}

impl Default for CointegrationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject pairs of unequal length before any fitting
pub(crate) fn ensure_same_length(series_1: &[f64], series_2: &[f64]) -> Result<(), CointError> {
    if series_1.len() != series_2.len() {
        return Err(CointError::DimensionMismatch {
            left: series_1.len(),
            right: series_2.len(),
        });
    }
    Ok(())
}

impl<R: LinearRegression, T: CointegrationTest> CointegrationAnalyzer<R, T> {
    pub fn with_routines(regression: R, test: T) -> Self {
        Self {
            regression,
            test,
            significance: SignificanceLevel::default(),
        }
    }

    /// Use a different significance level for the decision flag
    pub fn with_significance(mut self, significance: SignificanceLevel) -> Self {
        self.significance = significance;
        self
    }

    pub fn significance(&self) -> SignificanceLevel {
        self.significance
    }

    pub fn cointegration_test(&self) -> &T {
        &self.test
    }

    /// Static hedge ratio and intercept of series_1 on series_2
    pub fn hedge_fit(&self, series_1: &[f64], series_2: &[f64]) -> Result<HedgeFit, CointError> {
        ensure_same_length(series_1, series_2)?;
        let fit = self.regression.fit(series_2, series_1)?;
        Ok(HedgeFit {
            hedge_ratio: fit.slope,
            intercept: fit.intercept,
        })
    }

    /// Half-life of a single series with this analyzer's regression routine
    pub fn half_life(&self, series: &[f64]) -> Result<f64, CointError> {
        half_life_with(&self.regression, series)
    }

    /// Run the full pipeline on a pair of equal-length series
    pub fn calculate_cointegration(
        &self,
        series_1: &[f64],
        series_2: &[f64],
    ) -> Result<CointegrationResult, CointError> {
        ensure_same_length(series_1, series_2)?;

        let test = self.test.test(series_1, series_2)?;
        let critical_value = test.critical_values.at(self.significance);

        let hedge = self.hedge_fit(series_1, series_2)?;

        let spread: Vec<f64> = series_1
            .iter()
            .zip(series_2.iter())
            .map(|(&leg_1, &leg_2)| hedge.spread_at(leg_1, leg_2))
            .collect();

        let half_life = self.half_life(&spread)?;

        let is_cointegrated = test.is_cointegrated(self.significance);

        debug!(
            test_statistic = test.test_statistic,
            p_value = test.p_value,
            critical_value,
            hedge_ratio = hedge.hedge_ratio,
            intercept = hedge.intercept,
            half_life,
            is_cointegrated,
            "Cointegration calculated"
        );

        Ok(CointegrationResult {
            is_cointegrated,
            hedge_ratio: hedge.hedge_ratio,
            intercept: hedge.intercept,
            half_life,
            test,
        })
    }
}

/// Cointegration flag, hedge ratio and spread half-life of two series
///
/// Uses OLS and the Engle-Granger test at the 5% level.
pub fn calculate_cointegration(
    series_1: &[f64],
    series_2: &[f64],
) -> Result<CointegrationResult, CointError> {
    CointegrationAnalyzer::new().calculate_cointegration(series_1, series_2)
}
