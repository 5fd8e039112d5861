//! Correlation and Rolling Statistics
//!
//! Rolling outputs keep the input length: the first `window` entries are 0.0
//! padding, entry `i` is computed from the `window` points before `i`.

use super::cointegration::ensure_same_length;
use crate::domain::{CointError, SignificanceLevel};
use crate::ports::CointegrationTest;

/// Smallest window with a defined sample standard deviation
const MIN_WINDOW: usize = 2;

fn check_window(window: usize, len: usize) -> Result<(), CointError> {
    if window < MIN_WINDOW || window > len {
        return Err(CointError::InvalidWindow { window, len });
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation coefficient
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64, CointError> {
    ensure_same_length(x, y)?;
    if x.len() < MIN_WINDOW {
        return Err(CointError::InvalidInput(format!(
            "correlation needs at least {} points, got {}",
            MIN_WINDOW,
            x.len()
        )));
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x_i, &y_i) in x.iter().zip(y.iter()) {
        let dx = x_i - mean_x;
        let dy = y_i - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Err(CointError::ZeroVariance("correlation input is constant".to_string()));
    }

    Ok((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// z-score of each point against the preceding window (sample std)
pub fn rolling_zscore(series: &[f64], window: usize) -> Result<Vec<f64>, CointError> {
    check_window(window, series.len())?;

    let mut z_scores = vec![0.0; window];
    z_scores.reserve(series.len() - window);

    for i in window..series.len() {
        let window_data = &series[i - window..i];
        let mean = mean(window_data);
        let var = window_data.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (window_data.len() - 1) as f64;
        let std_dev = var.sqrt();

        if std_dev == 0.0 {
            return Err(CointError::ZeroVariance(format!(
                "z-score window ending before index {}",
                i
            )));
        }
        z_scores.push((series[i] - mean) / std_dev);
    }

    Ok(z_scores)
}

/// Pearson correlation over a sliding window
pub fn rolling_correlation(
    series_1: &[f64],
    series_2: &[f64],
    window: usize,
) -> Result<Vec<f64>, CointError> {
    ensure_same_length(series_1, series_2)?;
    check_window(window, series_1.len())?;

    let mut correlations = vec![0.0; window];
    correlations.reserve(series_1.len() - window);

    for i in window..series_1.len() {
        correlations.push(pearson_correlation(
            &series_1[i - window..i],
            &series_2[i - window..i],
        )?);
    }

    Ok(correlations)
}

/// Critical value minus test statistic over a sliding window
///
/// Positive entries mean the window passed the critical value at `level`.
pub fn rolling_cointegration<T>(
    test: &T,
    series_1: &[f64],
    series_2: &[f64],
    window: usize,
    level: SignificanceLevel,
) -> Result<Vec<f64>, CointError>
where
    T: CointegrationTest + ?Sized,
{
    ensure_same_length(series_1, series_2)?;
    check_window(window, series_1.len())?;

    let mut distances = vec![0.0; window];
    distances.reserve(series_1.len() - window);

    for i in window..series_1.len() {
        let result = test.test(&series_1[i - window..i], &series_2[i - window..i])?;
        distances.push(result.critical_distance(level));
    }

    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CointTest, CriticalValues, FitError};
    use crate::ports::MockCointegrationTest;
    use crate::stats::EngleGranger;
    use approx::assert_relative_eq;

    #[test]
    fn test_correlation_perfect() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);

        let y_neg = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(pearson_correlation(&x, &y_neg).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_symmetric() {
        let x = [1.0, 3.0, 2.0, 5.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0];
        assert_relative_eq!(
            pearson_correlation(&x, &y).unwrap(),
            pearson_correlation(&y, &x).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_correlation_errors() {
        assert!(matches!(
            pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(CointError::ZeroVariance(_))
        ));
        assert!(matches!(
            pearson_correlation(&[1.0, 2.0], &[1.0]),
            Err(CointError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            pearson_correlation(&[1.0], &[1.0]),
            Err(CointError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rolling_zscore_values() {
        let series = [1.0, 2.0, 3.0, 10.0];
        let z = rolling_zscore(&series, 3).unwrap();

        // Window [1, 2, 3]: mean 2, sample std 1
        assert_eq!(z.len(), 4);
        assert_eq!(&z[..3], &[0.0, 0.0, 0.0]);
        assert_relative_eq!(z[3], 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rolling_zscore_window_checks() {
        assert_eq!(
            rolling_zscore(&[1.0, 2.0], 3),
            Err(CointError::InvalidWindow { window: 3, len: 2 })
        );
        assert_eq!(
            rolling_zscore(&[1.0, 2.0], 1),
            Err(CointError::InvalidWindow { window: 1, len: 2 })
        );
        assert!(matches!(
            rolling_zscore(&[1.0, 1.0, 1.0, 4.0], 3),
            Err(CointError::ZeroVariance(_))
        ));
        // Window equal to the length is all padding
        assert_eq!(rolling_zscore(&[1.0, 2.0, 3.0], 3).unwrap(), vec![0.0; 3]);
    }

    #[test]
    fn test_rolling_correlation() {
        let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();

        let corr = rolling_correlation(&x, &y, 5).unwrap();

        assert_eq!(corr.len(), 20);
        assert!(corr[..5].iter().all(|&c| c == 0.0));
        assert!(corr[5..].iter().all(|&c| c > 0.9 && c <= 1.0));
    }

    #[test]
    fn test_rolling_cointegration_distance() {
        let mut test = MockCointegrationTest::new();
        test.expect_test().times(2).returning(|_, _| {
            Ok(CointTest {
                test_statistic: -4.0,
                p_value: 0.01,
                critical_values: CriticalValues {
                    one_pct: -3.9,
                    five_pct: -3.4,
                    ten_pct: -3.1,
                },
            })
        });

        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let distances =
            rolling_cointegration(&test, &series, &series, 3, SignificanceLevel::FivePercent).unwrap();

        assert_eq!(distances.len(), 5);
        assert_eq!(&distances[..3], &[0.0, 0.0, 0.0]);
        assert_relative_eq!(distances[3], 0.6, epsilon = 1e-12);
        assert_relative_eq!(distances[4], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_rolling_cointegration_propagates_failure() {
        let mut test = MockCointegrationTest::new();
        test.expect_test()
            .returning(|_, _| Err(FitError::SingularDesign));

        let series = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            rolling_cointegration(&test, &series, &series, 3, SignificanceLevel::FivePercent),
            Err(CointError::UnderlyingFitFailure(FitError::SingularDesign))
        );
    }

    #[test]
    fn test_rolling_cointegration_with_engle_granger() {
        let x: Vec<f64> = (0..80).map(|i| 20.0 + (i as f64 * 0.2).sin() * 2.0 + i as f64 * 0.1).collect();
        let y: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, v)| 1.5 * v + if i % 2 == 0 { 0.3 } else { -0.3 })
            .collect();

        let distances =
            rolling_cointegration(&EngleGranger::new(), &y, &x, 40, SignificanceLevel::FivePercent)
                .unwrap();

        assert_eq!(distances.len(), 80);
        // Alternating residuals are as stationary as it gets
        assert!(distances[40..].iter().all(|&d| d > 0.0));
    }
}
