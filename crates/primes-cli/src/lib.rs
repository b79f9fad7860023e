//! Command-line driver for the prime analyzer.
//!
//! Parses arguments, resolves configuration, runs the analysis through the
//! guarded [`AnalysisService`] and renders the result as text or JSON.

mod error;
pub mod report;

pub use error::CliError;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use primes_analysis::AnalysisService;
use primes_core::config::{CliOverrides, PrimesConfig};
use primes_core::constants::DEFAULT_CLI_BOUND;

/// Prime analyzer CLI arguments
#[derive(Parser, Debug)]
#[command(name = "primes")]
#[command(author, version, about = "Analyze prime number patterns up to a bound")]
pub struct Cli {
    /// Inclusive upper bound for the prime search
    #[arg(long, short = 'l', default_value_t = DEFAULT_CLI_BOUND, allow_negative_numbers = true)]
    pub limit: i64,

    /// Only print one section of the report (default: all)
    #[arg(long, value_enum)]
    pub plot: Option<Section>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Override the largest accepted bound
    #[arg(long)]
    pub max_bound: Option<u64>,

    /// Override the number of gap sizes shown
    #[arg(long)]
    pub gap_limit: Option<usize>,

    /// Override the number of twin pairs listed
    #[arg(long)]
    pub twin_limit: Option<usize>,

    /// Directory searched for `primes.toml` (default: current directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Directory holding the user-level `config.toml` (default: `~/.primes`)
    #[arg(long)]
    pub user_config_dir: Option<PathBuf>,
}

/// Report section selectable with `--plot`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Distribution,
    Gaps,
    Twins,
}

/// Output format for the result.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_bound: self.max_bound,
            gap_chart_limit: self.gap_limit,
            twin_display_limit: self.twin_limit,
        }
    }

    /// Resolve the layered configuration for this invocation.
    pub fn resolve_config(&self) -> Result<PrimesConfig, CliError> {
        let root = self.config_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let overrides = self.overrides();
        let config = match &self.user_config_dir {
            Some(user_dir) => {
                PrimesConfig::load_with_user_dir(&root, Some(user_dir.as_path()), Some(&overrides))?
            }
            None => PrimesConfig::load(&root, Some(&overrides))?,
        };
        Ok(config)
    }
}

/// Execute one CLI invocation, writing the report to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let config = cli.resolve_config()?;
    run_with_config(cli, &config, out)
}

/// Same as [`run`] with an already resolved configuration.
pub fn run_with_config<W: Write>(
    cli: &Cli,
    config: &PrimesConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let service = AnalysisService::new(&config.analysis);
    let ticket = service.submit(cli.limit)?;
    let result = ticket.wait()?;

    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Human => {
            report::write_human(out, &result, &config.report, cli.plot)?;
        }
    }
    tracing::debug!(limit = cli.limit, "report written");
    Ok(())
}
