//! pairs-coint - Cointegration diagnostics for pairs trading
//!
//! Command-line front end over the `pairs_coint` library.

use anyhow::Result;

use pairs_coint::adapters::cli;

fn main() -> Result<()> {
    let app = cli::init();
    cli::execute(app)
}
