//! Matching engine for RideMatch
//!
//! This crate provides:
//! - Input reading: offer lines up to the first query line
//! - Contiguous partitioning of the offer collection
//! - A partitioned matcher that scans partitions on scoped worker threads
//!   and merges results in offer order

pub mod partitioned;
pub mod reader;

pub use partitioned::{
    partition_ranges, ContiguousPartitioner, MatchOutcome, MatchStats, OfferMatcher,
};
pub use reader::{read_request, MatchRequest};
