//! Adapters Layer - Edges of the library
//!
//! - CLI: Command-line interface handlers
//! - Input: JSON price series files

pub mod cli;
pub mod input;

pub use cli::CliApp;
pub use input::{load_pair, load_series, InputError, PairInput, SeriesInput};
