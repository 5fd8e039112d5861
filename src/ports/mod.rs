//! Ports Layer - Trait definitions for the statistics collaborator
//!
//! The analysis layer only talks to these traits. Built-in implementations
//! live in `crate::stats`; tests swap in mocks.

pub mod regression;

pub use coint_test::CointegrationTest;
pub use regression::LinearRegression;

#[cfg(test)]
pub use coint_test::MockCointegrationTest;
#[cfg(test)]
pub use regression::MockLinearRegression;
