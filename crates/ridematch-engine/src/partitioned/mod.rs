//! Partitioned matching for parallel scans.
//!
//! The offer collection is split into contiguous partitions, each partition
//! is scanned independently, and the per-partition results are concatenated
//! in partition order.
//!
//! # Usage
//!
//! 1. Build an [`OfferMatcher`] from a [`RideMatchConfig`]
//! 2. Call [`OfferMatcher::find_matches`] with the loaded offers and a query
//! 3. Read the matched offers, in collection order, from the [`MatchOutcome`]
//!
//! # Example
//!
//! ```
//! use ridematch_config::{RideMatchConfig, ThreadCount};
//! use ridematch_core::{Interval, Offer, PaymentMethod, Query};
//! use ridematch_engine::OfferMatcher;
//!
//! let offer = |name: &str, payment| {
//!     let (arrival, ride_time) = (Interval::new(1, 10), Interval::new(5, 30));
//!     Offer::new(name, arrival, Interval::new(100, 500), ride_time, payment)
//! };
//! let offers = vec![offer("FastCab", PaymentMethod::Card), offer("EcoRide", PaymentMethod::Cash)];
//!
//! let config = RideMatchConfig::new().with_thread_count(ThreadCount::Count(2));
//! let matcher = OfferMatcher::new(config);
//! let outcome = matcher.find_matches(&offers, &Query::new(1, 200, 10, PaymentMethod::Card));
//!
//! assert_eq!(outcome.service_names().collect::<Vec<_>>(), vec!["FastCab"]);
//! ```

mod partitioner;


use std::ops::Range;
use std::thread;
use std::time::{Duration, Instant};

use ridematch_config::RideMatchConfig;
use ridematch_core::{Offer, Query};
use tracing::{info, trace};

pub use partitioner::{partition_ranges, ContiguousPartitioner};

/// Counters describing one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchStats {
    /// Offers evaluated.
    pub offers_scanned: usize,
    /// Partitions the collection was split into.
    pub partitions: usize,
    /// Worker threads spawned; zero when the scan ran on the calling thread.
    pub threads: usize,
    /// Offers accepted by the query.
    pub matched: usize,
    /// Wall time of the scan.
    pub elapsed: Duration,
}

/// Offers accepted by a query, in collection order.
#[derive(Debug, Clone)]
pub struct MatchOutcome<'a> {
    matches: Vec<&'a Offer>,
    stats: MatchStats,
}

impl<'a> MatchOutcome<'a> {
    /// Returns the matched offers.
    pub fn matches(&self) -> &[&'a Offer] {
        &self.matches
    }

    /// Returns the service names of the matched offers.
    pub fn service_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.matches.iter().copied().map(Offer::service_name)
    }

    /// Returns the scan counters.
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Returns the number of matched offers.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if no offer matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Consumes the outcome, returning owned service names.
    pub fn into_service_names(self) -> Vec<String> {
        self.matches
            .into_iter()
            .map(|offer| offer.service_name().to_string())
            .collect()
    }
}

/// Evaluates one query against an offer collection.
///
/// Each worker borrows a disjoint slice of the collection and returns its
/// own result buffer through its join handle. Handles are joined in
/// partition order, so the merged result does not depend on the number
/// of workers.
#[derive(Debug, Clone)]
pub struct OfferMatcher {
    config: RideMatchConfig,
}

impl Default for OfferMatcher {
    fn default() -> Self {
        Self::new(RideMatchConfig::default())
    }
}

impl OfferMatcher {
    /// Creates a matcher with the given configuration.
    pub fn new(config: RideMatchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this matcher was built with.
    pub fn config(&self) -> &RideMatchConfig {
        &self.config
    }

    /// Returns the partitioner for the configured worker count.
    pub fn partitioner(&self) -> ContiguousPartitioner {
        ContiguousPartitioner::new(self.config.thread_count.resolve())
            .with_min_partition_size(self.config.min_partition_size)
    }

    /// Finds every offer accepting `query`, preserving collection order.
    pub fn find_matches<'a>(&self, offers: &'a [Offer], query: &Query) -> MatchOutcome<'a> {
        let start = Instant::now();
        let ranges = self.partitioner().partition(offers.len());
        let busy = ranges.iter().filter(|r| !r.is_empty()).count();

        info!(
            event = "match_start",
            offers = offers.len(),
            partitions = ranges.len(),
            query = %query,
        );

        let (buffers, threads) = if busy <= 1 {
            // Sequential execution
            let buffers = ranges
                .iter()
                .enumerate()
                .map(|(index, range)| Self::scan_partition(index, offers, range.clone(), query))
                .collect::<Vec<_>>();
            (buffers, 0)
        } else {
            // Parallel execution
            (Self::scan_parallel(offers, &ranges, query), busy)
        };

        let matches: Vec<&'a Offer> = buffers.into_iter().flatten().collect();
        let stats = MatchStats {
            offers_scanned: offers.len(),
            partitions: ranges.len(),
            threads,
            matched: matches.len(),
            elapsed: start.elapsed(),
        };

        info!(
            event = "match_end",
            matched = stats.matched,
            threads = stats.threads,
            duration_ms = stats.elapsed.as_millis() as u64,
        );

        MatchOutcome { matches, stats }
    }

    /// Convenience wrapper returning owned service names.
    pub fn matching_service_names(&self, offers: &[Offer], query: &Query) -> Vec<String> {
        self.find_matches(offers, query).into_service_names()
    }

    fn scan_parallel<'a>(
        offers: &'a [Offer],
        ranges: &[Range<usize>],
        query: &Query,
    ) -> Vec<Vec<&'a Offer>> {
        thread::scope(|s| {
            let handles: Vec<_> = ranges
                .iter()
                .enumerate()
                .map(|(index, range)| {
                    if range.is_empty() {
                        return None;
                    }
                    let range = range.clone();
                    Some(s.spawn(move || Self::scan_partition(index, offers, range, query)))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle {
                    Some(handle) => handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic)),
                    None => Vec::new(),
                })
                .collect()
        })
    }

    fn scan_partition<'a>(
        index: usize,
        offers: &'a [Offer],
        range: Range<usize>,
        query: &Query,
    ) -> Vec<&'a Offer> {
        let matched: Vec<&'a Offer> = offers[range.clone()]
            .iter()
            .filter(|offer| offer.is_good_for(query))
            .collect();

        trace!(
            event = "partition_scanned",
            partition = index,
            start = range.start,
            end = range.end,
            matched = matched.len(),
        );

        matched
    }
}
