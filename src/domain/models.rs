//! Domain Models
//!
//! Plain data produced by the regression, cointegration test and half-life
//! routines. Everything here is created fresh per call and owned by the caller.

use serde::{Deserialize, Serialize};

/// Significance level used to read the critical value table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignificanceLevel {
    #[serde(rename = "1%")]
    OnePercent,
    #[default]
    #[serde(rename = "5%")]
    FivePercent,
    #[serde(rename = "10%")]
    TenPercent,
}

impl SignificanceLevel {
    /// p-value threshold for this level
    pub fn alpha(&self) -> f64 {
        match self {
            SignificanceLevel::OnePercent => 0.01,
            SignificanceLevel::FivePercent => 0.05,
            SignificanceLevel::TenPercent => 0.10,
        }
    }

    /// Position in the canonical {1%, 5%, 10%} critical value table
    pub fn index(&self) -> usize {
        match self {
            SignificanceLevel::OnePercent => 0,
            SignificanceLevel::FivePercent => 1,
            SignificanceLevel::TenPercent => 2,
        }
    }
}

/// Critical values of the cointegration test, ordered 1%, 5%, 10%
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    pub one_pct: f64,
    pub five_pct: f64,
    pub ten_pct: f64,
}

impl CriticalValues {
    pub fn as_array(&self) -> [f64; 3] {
        [self.one_pct, self.five_pct, self.ten_pct]
    }

    /// Critical value at the given significance level
    pub fn at(&self, level: SignificanceLevel) -> f64 {
        self.as_array()[level.index()]
    }
}

/// Outcome of a cointegration test routine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CointTest {
    /// Dickey-Fuller t-statistic on the residuals (more negative = stronger),
    /// -inf for collinear pairs
    #[serde(with = "crate::domain::extended_float")]
    pub test_statistic: f64,
    /// MacKinnon approximate p-value
    pub p_value: f64,
    pub critical_values: CriticalValues,
}

impl CointTest {
    /// Conjunctive decision: p-value below alpha and statistic below the
    /// critical value at the same level
    pub fn is_cointegrated(&self, level: SignificanceLevel) -> bool {
        self.p_value < level.alpha() && self.test_statistic < self.critical_values.at(level)
    }

    /// Distance of the statistic past the critical value (positive = cointegrated)
    pub fn critical_distance(&self, level: SignificanceLevel) -> f64 {
        self.critical_values.at(level) - self.test_statistic
    }
}

/// Result of a simple linear regression `y = intercept + slope * x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    pub intercept: f64,
    pub slope: f64,
    /// `y[i] - (intercept + slope * x[i])`
    pub residuals: Vec<f64>,
    pub r_squared: f64,
    /// Standard error of the estimate, NaN with fewer than 3 observations
    pub std_error: f64,
}

impl RegressionFit {
    /// Coefficients in intercept-first order
    pub fn params(&self) -> [f64; 2] {
        [self.intercept, self.slope]
    }
}

/// Static hedge relationship `series_1 ≈ intercept + hedge_ratio * series_2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgeFit {
    pub hedge_ratio: f64,
    pub intercept: f64,
}

impl HedgeFit {
    /// Spread of a single observation pair
    pub fn spread_at(&self, leg_1: f64, leg_2: f64) -> f64 {
        leg_1 - self.hedge_ratio * leg_2 - self.intercept
    }
}

/// Full output of `calculate_cointegration`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CointegrationResult {
    pub is_cointegrated: bool,
    pub hedge_ratio: f64,
    pub intercept: f64,
    /// Half-life of the spread in sampling intervals
    pub half_life: f64,
    pub test: CointTest,
}

impl CointegrationResult {
    /// Cointegration flag as an integer (1 = cointegrated)
    pub fn flag(&self) -> u8 {
        u8::from(self.is_cointegrated)
    }

    /// `(flag, hedge_ratio, half_life)`
    pub fn as_tuple(&self) -> (u8, f64, f64) {
        (self.flag(), self.hedge_ratio, self.half_life)
    }
}

/// How the spread between two legs is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadType {
    /// Single OLS hedge ratio over the whole sample
    #[default]
    Static,
    /// Kalman-filtered hedge ratio per observation
    Dynamic,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_test(t: f64, p: f64) -> CointTest {
        CointTest {
            test_statistic: t,
            p_value: p,
            critical_values: CriticalValues {
                one_pct: -3.96,
                five_pct: -3.37,
                ten_pct: -3.07,
            },
        }
    }

    #[test]
    fn test_significance_level_mapping() {
        assert_eq!(SignificanceLevel::default(), SignificanceLevel::FivePercent);
        assert_eq!(SignificanceLevel::FivePercent.index(), 1);
        assert_eq!(SignificanceLevel::FivePercent.alpha(), 0.05);
        assert_eq!(SignificanceLevel::OnePercent.index(), 0);
        assert_eq!(SignificanceLevel::TenPercent.alpha(), 0.10);
    }

    #[test]
    fn test_critical_value_lookup() {
        let test = sample_test(-4.0, 0.01);
        assert_eq!(test.critical_values.at(SignificanceLevel::FivePercent), -3.37);
        assert_eq!(test.critical_values.as_array()[1], -3.37);
    }

    #[test]
    fn test_decision_requires_both_conditions() {
        // Both pass
        assert!(sample_test(-4.0, 0.01).is_cointegrated(SignificanceLevel::FivePercent));
        // Statistic passes, p-value fails
        assert!(!sample_test(-4.0, 0.06).is_cointegrated(SignificanceLevel::FivePercent));
        // p-value passes, statistic fails
        assert!(!sample_test(-3.0, 0.01).is_cointegrated(SignificanceLevel::FivePercent));
        // Looser level admits a weaker statistic
        assert!(sample_test(-3.2, 0.08).is_cointegrated(SignificanceLevel::TenPercent));
    }

    #[test]
    fn test_result_tuple() {
        let result = CointegrationResult {
            is_cointegrated: true,
            hedge_ratio: 1.5,
            intercept: 0.2,
            half_life: 6.93,
            test: sample_test(-4.0, 0.01),
        };
        assert_eq!(result.as_tuple(), (1, 1.5, 6.93));

        let rejected = CointegrationResult {
            is_cointegrated: false,
            ..result
        };
        assert_eq!(rejected.flag(), 0);
    }

    #[test]
    fn test_serde_names() {
        let level: SignificanceLevel = serde_json::from_str("\"10%\"").unwrap();
        assert_eq!(level, SignificanceLevel::TenPercent);

        let spread: SpreadType = serde_json::from_str("\"dynamic\"").unwrap();
        assert_eq!(spread, SpreadType::Dynamic);
    }

    #[test]
    fn test_collinear_result_json_round_trip() {
        let result = CointegrationResult {
            is_cointegrated: true,
            hedge_ratio: 2.0,
            intercept: 1.0,
            half_life: 0.35,
            test: CointTest {
                test_statistic: f64::NEG_INFINITY,
                p_value: 0.0,
                ..sample_test(0.0, 0.0)
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""test_statistic":"-inf""#));

        let parsed: CointegrationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_hedge_fit_spread() {
        let hedge = HedgeFit {
            hedge_ratio: 2.0,
            intercept: 1.0,
        };
        assert_eq!(hedge.spread_at(11.0, 5.0), 0.0);
        assert_eq!(hedge.spread_at(12.0, 5.0), 1.0);
    }
}
