//! Entry point that wires the reader and the matcher.

use std::io::{self, BufRead};

use ridematch_config::{ConfigError, RideMatchConfig};
use ridematch_core::RideMatchError;
use ridematch_engine::{read_request, MatchStats, OfferMatcher};
use thiserror::Error;

/// Any failure of a full run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Match(#[from] RideMatchError),

    #[error("Cannot open input: {0}")]
    Input(#[from] io::Error),
}

/// Result of a run: matched names in output order and the scan counters.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub service_names: Vec<String>,
    pub stats: MatchStats,
}

/// Reads offers and the query from `reader` and returns the service names
/// of every matching offer, in input order.
pub fn run<R: BufRead>(reader: R, config: &RideMatchConfig) -> Result<Vec<String>, RunError> {
    run_report(reader, config).map(|report| report.service_names)
}

/// Like [`run`], also returning the scan counters.
pub fn run_report<R: BufRead>(reader: R, config: &RideMatchConfig) -> Result<RunReport, RunError> {
    config.validate()?;

    let request = read_request(reader)?;
    let matcher = OfferMatcher::new(config.clone());
    let outcome = matcher.find_matches(&request.offers, &request.query);
    let stats = *outcome.stats();

    Ok(RunReport {
        service_names: outcome.into_service_names(),
        stats,
    })
}
