//! MacKinnon Response Surfaces
//!
//! Approximate p-values (MacKinnon 1994) and finite-sample critical values
//! (MacKinnon 2010) for Dickey-Fuller type statistics, constant-only
//! deterministic term. `n_vars` is the number of series in the cointegrating
//! regression (1 = plain unit root test, 2 = Engle-Granger on a pair).

use statrs::distribution::{ContinuousCDF, Normal};

use crate::domain::{CriticalValues, FitError};

/// Largest number of series covered by the tables
pub const MAX_VARIABLES: usize = 6;

/// Above this statistic the p-value is 1
const TAU_MAX_C: [f64; MAX_VARIABLES] = [2.74, 0.92, 0.55, 0.61, 0.79, 1.0];
/// Below this statistic the p-value is 0
const TAU_MIN_C: [f64; MAX_VARIABLES] = [-18.83, -18.86, -23.48, -28.07, -25.96, -23.27];
/// Switch point between the small-p and large-p polynomials
const TAU_STAR_C: [f64; MAX_VARIABLES] = [-1.61, -2.62, -3.13, -3.47, -3.78, -3.93];

/// Small-p polynomial coefficients, lowest order first
const TAU_C_SMALLP: [[f64; 3]; MAX_VARIABLES] = [
    [2.1659, 1.4412, 3.8269e-2],
    [2.92, 1.5012, 3.9796e-2],
    [3.4699, 1.4856, 3.164e-2],
    [3.9673, 1.4777, 2.6315e-2],
    [4.5509, 1.5338, 2.9545e-2],
    [5.1399, 1.6036, 3.4445e-2],
];

/// Large-p polynomial coefficients, lowest order first
const TAU_C_LARGEP: [[f64; 4]; MAX_VARIABLES] = [
    [1.7339, 9.3202e-1, -1.2745e-1, -1.0368e-2],
    [2.1945, 6.4695e-1, -2.9198e-1, -4.2377e-2],
    [2.5893, 4.5168e-1, -3.6529e-1, -5.0074e-2],
    [3.0387, 4.5452e-1, -3.3666e-1, -4.1921e-2],
    [3.5049, 5.2098e-1, -2.9158e-1, -3.3468e-2],
    [3.9489, 5.8933e-1, -2.5359e-1, -2.721e-2],
];

/// Critical value response surfaces per variable count, rows 1%, 5%, 10%,
/// columns `c0 + c1/T + c2/T^2 + c3/T^3`
const TAU_C_2010: [[[f64; 4]; 3]; MAX_VARIABLES] = [
    [
        [-3.43035, -6.5393, -16.786, -79.433],
        [-2.86154, -2.8903, -4.234, -40.040],
        [-2.56677, -1.5384, -2.809, 0.0],
    ],
    [
        [-3.89644, -10.9519, -33.527, 0.0],
        [-3.33613, -6.1101, -6.823, 0.0],
        [-3.04445, -4.2412, -2.720, 0.0],
    ],
    [
        [-4.29374, -14.4354, -33.195, 47.433],
        [-3.74066, -8.5632, -10.852, 27.982],
        [-3.45218, -6.2143, -3.718, 0.0],
    ],
    [
        [-4.64332, -18.1031, -37.972, 0.0],
        [-4.09600, -11.2349, -11.175, 0.0],
        [-3.81020, -8.3931, -4.137, 0.0],
    ],
    [
        [-4.95756, -21.8883, -45.142, 0.0],
        [-4.41519, -14.0405, -12.575, 0.0],
        [-4.13157, -10.7417, -3.784, 0.0],
    ],
    [
        [-5.24568, -25.6688, -57.737, 88.639],
        [-4.70693, -16.9178, -17.492, 60.007],
        [-4.42501, -13.1875, -5.104, 27.877],
    ],
];

/// Evaluate a polynomial given lowest-order-first coefficients (Horner)
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

fn table_row(n_vars: usize) -> Result<usize, FitError> {
    if n_vars == 0 || n_vars > MAX_VARIABLES {
        return Err(FitError::Distribution(format!(
            "MacKinnon tables cover 1..={} variables, got {}",
            MAX_VARIABLES, n_vars
        )));
    }
    Ok(n_vars - 1)
}

/// Approximate p-value of a Dickey-Fuller statistic
///
/// Returns 1.0 above the tabulated maximum and 0.0 below the minimum, so an
/// infinitely negative statistic maps to 0.
pub fn p_value(t_stat: f64, n_vars: usize) -> Result<f64, FitError> {
    let row = table_row(n_vars)?;

    if t_stat.is_nan() {
        return Err(FitError::Distribution("test statistic is NaN".to_string()));
    }
    if t_stat > TAU_MAX_C[row] {
        return Ok(1.0);
    }
    if t_stat < TAU_MIN_C[row] {
        return Ok(0.0);
    }

    let z = if t_stat <= TAU_STAR_C[row] {
        polyval(&TAU_C_SMALLP[row], t_stat)
    } else {
        polyval(&TAU_C_LARGEP[row], t_stat)
    };

    let normal = Normal::new(0.0, 1.0).map_err(|e| FitError::Distribution(e.to_string()))?;
    Ok(normal.cdf(z))
}

/// Finite-sample critical values at 1%, 5% and 10%
///
/// `nobs` is the number of observations entering the Dickey-Fuller regression.
pub fn critical_values(n_vars: usize, nobs: usize) -> Result<CriticalValues, FitError> {
    let row = table_row(n_vars)?;
    if nobs == 0 {
        return Err(FitError::InsufficientObservations {
            required: 1,
            actual: 0,
        });
    }

    let inv_t = 1.0 / nobs as f64;
    let [one, five, ten] = TAU_C_2010[row];

    Ok(CriticalValues {
        one_pct: polyval(&one, inv_t),
        five_pct: polyval(&five, inv_t),
        ten_pct: polyval(&ten, inv_t),
    })
}
