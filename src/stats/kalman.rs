//! Kalman Filter for dynamic hedge ratio estimation
//!
//! Scalar filter tracking the hedge ratio β as a random walk, observed
//! through the price ratio of the two legs:
//!
//! ```text
//! β[t] = β[t-1] + w,          w ~ N(0, Q)
//! r[t] = leg_0[t] / leg_1[t] = β[t] + v,   v ~ N(0, R)
//! ```

use serde::{Deserialize, Serialize};

/// Filter parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalmanConfig {
    /// Q: how fast β may drift
    pub process_noise: f64,
    /// R: noise of each ratio observation
    pub observation_noise: f64,
    /// P at t = 0
    pub initial_variance: f64,
    /// β at t = 0
    pub initial_beta: f64,
}

impl Default for KalmanConfig {
    fn default() -> Self {
        Self {
            process_noise: 1e-4,
            observation_noise: 1.0,
            initial_variance: 1.0,
            initial_beta: 0.0,
        }
    }
}

impl KalmanConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.process_noise.is_finite() || self.process_noise < 0.0 {
            return Err(format!("process_noise must be >= 0, got {}", self.process_noise));
        }
        if !self.observation_noise.is_finite() || self.observation_noise <= 0.0 {
            return Err(format!(
                "observation_noise must be > 0, got {}",
                self.observation_noise
            ));
        }
        if !self.initial_variance.is_finite() || self.initial_variance <= 0.0 {
            return Err(format!(
                "initial_variance must be > 0, got {}",
                self.initial_variance
            ));
        }
        if !self.initial_beta.is_finite() {
            return Err("initial_beta must be finite".to_string());
        }
        Ok(())
    }
}

/// Hedge ratio tracker
#[derive(Debug, Clone)]
pub struct KalmanHedgeRatio {
    beta: f64,
    variance: f64,
    process_noise: f64,
    observation_noise: f64,
    update_count: u64,
}

impl KalmanHedgeRatio {
    pub fn new(config: &KalmanConfig) -> Self {
        Self {
            beta: config.initial_beta,
            variance: config.initial_variance,
            process_noise: config.process_noise,
            observation_noise: config.observation_noise,
            update_count: 0,
        }
    }

    /// Fold in one ratio observation and return the updated β
    ///
    /// Non-finite observations leave the state untouched.
    pub fn update(&mut self, ratio: f64) -> f64 {
        if !ratio.is_finite() {
            return self.beta;
        }
        self.update_count += 1;

        // Predict
        let p_predicted = self.variance + self.process_noise;

        // Update
        let gain = p_predicted / (p_predicted + self.observation_noise);
        self.beta += gain * (ratio - self.beta);
        self.variance = (1.0 - gain) * p_predicted;

        self.beta
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    #[inline]
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
