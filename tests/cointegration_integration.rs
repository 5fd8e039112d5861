//! Cointegration Integration Tests
//!
//! End-to-end checks of the public API on seeded synthetic series:
//! 1. AR(1) half-life recovery
//! 2. Identical series (collinear first stage)
//! 3. Independent random walks rarely flagged
//! 4. Cointegrated pair flagged with the right hedge ratio
//! 5. Determinism and the pair statistics bundle
//!
//! Every generator takes its seed as an argument.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pairs_coint::analysis::{mean_reversion_slope, spread_static};
use pairs_coint::domain::SpreadType;
use pairs_coint::{
    calculate_cointegration, half_life_mean_reversion, AnalysisConfig, CointError,
    CointegrationAnalyzer, CointegrationTest, EngleGranger, PairStatistics, SignificanceLevel,
};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Standard normal draw via Box-Muller
fn gaussian(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// `x[t+1] = phi * x[t] + noise`, starting at zero
fn ar1(seed: u64, n: usize, phi: f64, sigma: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(n);
    let mut value = 0.0;
    for _ in 0..n {
        series.push(value);
        value = phi * value + sigma * gaussian(&mut rng);
    }
    series
}

/// Gaussian random walk starting at `start`
fn random_walk(seed: u64, n: usize, start: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(n);
    let mut value = start;
    for _ in 0..n {
        series.push(value);
        value += gaussian(&mut rng);
    }
    series
}

/// `series_1 = 2 * series_2 + 1 + AR(0.5)` with `series_2` a random walk
fn cointegrated_pair(seed: u64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let series_2 = random_walk(seed, n, 100.0);
    let noise = ar1(seed.wrapping_add(1), n, 0.5, 1.0);
    let series_1 = series_2
        .iter()
        .zip(noise.iter())
        .map(|(x, e)| 2.0 * x + 1.0 + e)
        .collect();
    (series_1, series_2)
}

// ============================================================================
// Half-life
// ============================================================================

#[test]
fn test_ar1_half_life_recovered() {
    let series = ar1(7, 20_000, 0.9, 1.0);

    let slope = mean_reversion_slope(&series).unwrap();
    let half_life = half_life_mean_reversion(&series).unwrap();

    // theta = phi - 1, half-life = ln 2 / 0.1
    assert!((slope + 0.1).abs() < 0.02, "slope = {}", slope);
    assert!((half_life - 6.93).abs() < 1.0, "half-life = {}", half_life);
}

#[test]
fn test_half_life_edge_cases() {
    assert!(matches!(
        half_life_mean_reversion(&[]),
        Err(CointError::InvalidInput(_))
    ));
    assert!(matches!(
        half_life_mean_reversion(&[4.2]),
        Err(CointError::InvalidInput(_))
    ));

    let ramp: Vec<f64> = (0..50).map(|i| 3.0 + 0.5 * i as f64).collect();
    assert!(matches!(
        half_life_mean_reversion(&ramp),
        Err(CointError::DegenerateFit { .. })
    ));
}

// ============================================================================
// Identical series
// ============================================================================

#[test]
fn test_identical_series() {
    let series = random_walk(11, 300, 50.0);

    let analyzer = CointegrationAnalyzer::new();
    let hedge = analyzer.hedge_fit(&series, &series).unwrap();
    assert_relative_eq!(hedge.hedge_ratio, 1.0, epsilon = 1e-12);
    assert!(hedge.intercept.abs() < 1e-9);

    let test = EngleGranger::new().test(&series, &series).unwrap();
    assert_eq!(test.test_statistic, f64::NEG_INFINITY);
    assert_eq!(test.p_value, 0.0);
    assert!(test.is_cointegrated(SignificanceLevel::FivePercent));

    // Spread is identically zero, so the half-life slope cannot be inverted
    assert!(matches!(
        calculate_cointegration(&series, &series),
        Err(CointError::DegenerateFit { .. })
    ));
}

// ============================================================================
// Cointegration decision
// ============================================================================

#[test]
fn test_independent_random_walks_rarely_flagged() {
    let trials = 50;
    let flagged = (0..trials)
        .filter(|&trial| {
            let series_1 = random_walk(1_000 + trial, 500, 100.0);
            let series_2 = random_walk(5_000 + trial, 500, 100.0);
            calculate_cointegration(&series_1, &series_2)
                .unwrap()
                .is_cointegrated
        })
        .count();

    assert!(flagged <= trials as usize / 2, "flagged {} of {}", flagged, trials);
}

#[test]
fn test_cointegrated_pair_flagged() {
    let (series_1, series_2) = cointegrated_pair(42, 1_000);

    let result = calculate_cointegration(&series_1, &series_2).unwrap();

    assert_eq!(result.flag(), 1);
    assert!((result.hedge_ratio - 2.0).abs() < 0.05, "hedge = {}", result.hedge_ratio);
    assert!(result.test.p_value < 0.01);
    // AR(0.5) spread: half-life = ln 2 / 0.5
    assert!(result.half_life > 0.5 && result.half_life < 3.0);

    let (flag, hedge_ratio, half_life) = result.as_tuple();
    assert_eq!(flag, 1);
    assert_eq!(hedge_ratio, result.hedge_ratio);
    assert_eq!(half_life, result.half_life);
}

#[test]
fn test_stricter_level_never_flags_more() {
    let (series_1, series_2) = cointegrated_pair(3, 200);

    let loose = CointegrationAnalyzer::new()
        .with_significance(SignificanceLevel::TenPercent)
        .calculate_cointegration(&series_1, &series_2)
        .unwrap();
    let strict = CointegrationAnalyzer::new()
        .with_significance(SignificanceLevel::OnePercent)
        .calculate_cointegration(&series_1, &series_2)
        .unwrap();

    assert!(loose.is_cointegrated || !strict.is_cointegrated);
    assert_eq!(loose.test, strict.test);
}

#[test]
fn test_dimension_mismatch() {
    assert_eq!(
        calculate_cointegration(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0]),
        Err(CointError::DimensionMismatch { left: 4, right: 3 })
    );
}

#[test]
fn test_too_short_for_the_test() {
    assert!(matches!(
        calculate_cointegration(&[1.0, 2.0], &[2.0, 1.0]),
        Err(CointError::UnderlyingFitFailure(_))
    ));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_repeated_calls_are_bit_identical() {
    let (series_1, series_2) = cointegrated_pair(99, 400);

    let first = calculate_cointegration(&series_1, &series_2).unwrap();
    let second = calculate_cointegration(&series_1, &series_2).unwrap();

    assert_eq!(first.hedge_ratio.to_bits(), second.hedge_ratio.to_bits());
    assert_eq!(first.half_life.to_bits(), second.half_life.to_bits());
    assert_eq!(
        first.test.test_statistic.to_bits(),
        second.test.test_statistic.to_bits()
    );
    assert_eq!(first, second);
}

// ============================================================================
// Pair statistics
// ============================================================================

#[test]
fn test_pair_statistics_static() {
    let (series_1, series_2) = cointegrated_pair(5, 500);
    let config = AnalysisConfig::default();

    let stats = PairStatistics::calculate(&series_1, &series_2, &config).unwrap();
    let (spread, hedge) = spread_static(&series_1, &series_2).unwrap();

    assert!(stats.is_cointegrated);
    assert_eq!(stats.hedge_ratio, hedge.hedge_ratio);
    assert_eq!(stats.spread, spread);
    assert!(stats.corr > 0.9);
    assert_eq!(stats.zscore.len(), 500);
    // Most full windows pass the 5% critical value
    let passed = stats.coint_roll[60..].iter().filter(|&&d| d > 0.0).count();
    assert!(passed > 220, "passed {} windows", passed);
}

#[test]
fn test_pair_statistics_dynamic_serializes() {
    let (series_1, series_2) = cointegrated_pair(8, 300);
    let config = AnalysisConfig::default()
        .with_spread_type(SpreadType::Dynamic)
        .with_windows(20, 50);

    let stats = PairStatistics::calculate(&series_1, &series_2, &config).unwrap();
    let json = serde_json::to_string(&stats).unwrap();
    let parsed: PairStatistics = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.spread.len(), 300);
    assert_eq!(parsed.corr_roll.len(), 300);
    assert!(parsed.hedge_ratio.is_finite());
}

#[test]
fn test_near_collinear_result_survives_json() {
    let series_2: Vec<f64> = (0..200).map(|i| i as f64 + (i as f64 * 0.3).sin()).collect();
    let series_1: Vec<f64> = series_2
        .iter()
        .enumerate()
        .map(|(i, v)| 2.0 * v + 1.0 + if i % 2 == 0 { 1e-4 } else { -1e-4 })
        .collect();

    let result = calculate_cointegration(&series_1, &series_2).unwrap();
    assert_eq!(result.test.test_statistic, f64::NEG_INFINITY);
    assert_eq!(result.flag(), 1);

    let json = serde_json::to_string(&result).unwrap();
    let parsed: pairs_coint::CointegrationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.test.test_statistic, f64::NEG_INFINITY);
    assert_eq!(parsed.test.critical_values, result.test.critical_values);
    assert_eq!(parsed.flag(), 1);
}
