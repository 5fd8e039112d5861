//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the pairs-coint tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::adapters::input::{load_pair, load_series};
use crate::analysis::{half_life_mean_reversion, AnalysisConfig, CointegrationAnalyzer, PairStatistics};
use crate::config::{load_config, Config};
use crate::domain::{CointError, CointegrationResult};

/// pairs-coint - Cointegration diagnostics for pairs trading
#[derive(Parser, Debug)]
#[command(
    name = "pairs-coint",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Cointegration diagnostics for pairs trading",
    long_about = "pairs-coint runs an Engle-Granger cointegration test on two price series, \
                  estimates the hedge ratio and measures how fast the spread mean-reverts."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test a pair for cointegration
    Coint(CointCmd),

    /// Half-life of mean reversion of a single series
    HalfLife(HalfLifeCmd),

    /// Full pair statistics (spread, z-score, rolling diagnostics)
    Analyze(AnalyzeCmd),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Test a pair for cointegration
#[derive(Parser, Debug)]
pub struct CointCmd {
    /// JSON file with `series_1` and `series_2`
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Half-life of a single series
#[derive(Parser, Debug)]
pub struct HalfLifeCmd {
    /// JSON file with `series`
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Full pair statistics
#[derive(Parser, Debug)]
pub struct AnalyzeCmd {
    /// JSON file with `series_1` and `series_2`
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Command {
    /// Config file named on the command line, if any
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Coint(cmd) => cmd.config.as_deref(),
            Command::HalfLife(_) => None,
            Command::Analyze(cmd) => cmd.config.as_deref(),
        }
    }
}

/// Execute the CLI command
pub fn execute(app: CliApp) -> Result<()> {
    let config = match app.command.config_path() {
        Some(path) => load_config(expand_path(path))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    init_logging(app.verbose, app.debug, &config.logging.level)?;

    let output = match app.command {
        Command::Coint(cmd) => coint_command(&cmd, &config)?,
        Command::HalfLife(cmd) => half_life_command(&cmd)?,
        Command::Analyze(cmd) => analyze_command(&cmd, &config)?,
    };

    println!("{}", output);
    Ok(())
}

/// Initialize logging system
fn init_logging(verbose: bool, debug: bool, config_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        config_level
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Attach a context that tells input problems apart from fit failures
fn with_step_context<T>(result: Result<T, CointError>, step: &str) -> Result<T> {
    result.map_err(|e| {
        let context = if e.is_fit_failure() {
            format!("{} failed", step)
        } else {
            format!("{} rejected the input", step)
        };
        anyhow::Error::new(e).context(context)
    })
}

/// Expand `~` in user-supplied paths
fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// Handle coint command
fn coint_command(cmd: &CointCmd, config: &Config) -> Result<String> {
    let pair = load_pair(expand_path(&cmd.input))
        .with_context(|| format!("Failed to load pair from {}", cmd.input.display()))?;
    tracing::info!(
        "Testing pair of {} / {} observations",
        pair.series_1.len(),
        pair.series_2.len()
    );

    let analyzer = CointegrationAnalyzer::new().with_significance(config.analysis.significance);
    let result = with_step_context(
        analyzer.calculate_cointegration(&pair.series_1, &pair.series_2),
        "Cointegration analysis",
    )?;

    match cmd.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => Ok(render_cointegration(&result)),
    }
}

/// Handle half-life command
fn half_life_command(cmd: &HalfLifeCmd) -> Result<String> {
    let input = load_series(expand_path(&cmd.input))
        .with_context(|| format!("Failed to load series from {}", cmd.input.display()))?;

    let half_life =
        with_step_context(half_life_mean_reversion(&input.series), "Half-life calculation")?;

    match cmd.format {
        OutputFormat::Json => Ok(serde_json::json!({ "half_life": half_life }).to_string()),
        OutputFormat::Text => Ok(format!("Half-life: {:.4} periods", half_life)),
    }
}

/// Handle analyze command
fn analyze_command(cmd: &AnalyzeCmd, config: &Config) -> Result<String> {
    let pair = load_pair(expand_path(&cmd.input))
        .with_context(|| format!("Failed to load pair from {}", cmd.input.display()))?;

    let analysis_config = AnalysisConfig::from(config);
    let stats = with_step_context(
        PairStatistics::calculate(&pair.series_1, &pair.series_2, &analysis_config),
        "Pair analysis",
    )?;

    match cmd.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => Ok(render_statistics(&stats, &analysis_config)),
    }
}

fn render_cointegration(result: &CointegrationResult) -> String {
    let cv = &result.test.critical_values;
    [
        format!(
            "Cointegrated:   {}",
            if result.is_cointegrated { "yes" } else { "no" }
        ),
        format!("Hedge ratio:    {:.6}", result.hedge_ratio),
        format!("Intercept:      {:.6}", result.intercept),
        format!("Half-life:      {:.4} periods", result.half_life),
        format!("Test statistic: {:.4}", result.test.test_statistic),
        format!("p-value:        {:.4}", result.test.p_value),
        format!(
            "Critical (1%/5%/10%): {:.4} / {:.4} / {:.4}",
            cv.one_pct, cv.five_pct, cv.ten_pct
        ),
    ]
    .join("\n")
}

fn render_statistics(stats: &PairStatistics, config: &AnalysisConfig) -> String {
    let latest = |values: &[f64]| values.last().copied().unwrap_or(f64::NAN);
    [
        format!(
            "Cointegrated:   {}",
            if stats.is_cointegrated { "yes" } else { "no" }
        ),
        format!("Test statistic: {:.4}", stats.coint.test_statistic),
        format!("p-value:        {:.4}", stats.coint.p_value),
        format!("Correlation:    {:.4}", stats.corr),
        format!("Spread type:    {:?}", config.spread_type),
        format!("Hedge ratio:    {:.6}", stats.hedge_ratio),
        format!("Half-life:      {:.4} periods", stats.half_life),
        format!(
            "Latest z-score ({}):     {:.4}",
            config.zscore_window,
            latest(&stats.zscore)
        ),
        format!(
            "Latest rolling coint ({}): {:.4}",
            config.rolling_window,
            latest(&stats.coint_roll)
        ),
        format!(
            "Latest rolling corr ({}):  {:.4}",
            config.rolling_window,
            latest(&stats.corr_roll)
        ),
    ]
    .join("\n")
}
