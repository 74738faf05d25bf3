//! Command line interface of the `ridematch` binary.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ridematch_config::{ConfigError, RideMatchConfig, ThreadCount};
use tracing::level_filters::LevelFilter;

use crate::runner::{run, RunError};

/// Match a rider query against ride-hailing offers
///
/// Reads offer lines (`name, from-to, from-to, from-to, payment`) followed
/// by one query line (`arrive, price, ride_time, payment`) and prints the
/// name of every matching offer.
#[derive(Debug, Parser)]
#[command(name = "ridematch", version)]
pub struct Cli {
    /// Read input from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Matcher configuration (TOML, or YAML by extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads; 0 means one per CPU core
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the effective configuration: file values first, then flags.
    pub fn resolve_config(&self) -> Result<RideMatchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RideMatchConfig::load(path)?,
            None => RideMatchConfig::default(),
        };
        if let Some(threads) = self.threads {
            config.thread_count = ThreadCount::from_cli(threads);
        }
        config.validate()?;
        Ok(config)
    }

    /// Returns the log level requested by `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Runs the match described by these arguments.
    pub fn execute(&self) -> Result<Vec<String>, RunError> {
        let config = self.resolve_config()?;
        match &self.input {
            Some(path) => run(BufReader::new(File::open(path)?), &config),
            None => run(io::stdin().lock(), &config),
        }
    }
}
