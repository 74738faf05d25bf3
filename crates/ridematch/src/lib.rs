//! RideMatch - Ride-hailing offer matching in Rust
//!
//! Reads offers and a single rider query from a line-oriented stream and
//! returns the names of every offer that accepts the query, in input order.
//!
//! # Example
//!
//! ```rust
//! use ridematch::prelude::*;
//!
//! let input = "FastCab, 1-10, 100-500, 5-30, card\n\
//!              EcoRide, 1-10, 100-500, 5-30, cash\n\
//!              1, 200, 10, card\n";
//!
//! let names = ridematch::run(input.as_bytes(), &RideMatchConfig::default()).unwrap();
//! assert_eq!(names, vec!["FastCab"]);
//! ```

pub mod cli;
mod runner;

pub use runner::{run, run_report, RunError, RunReport};

pub use ridematch_config::{ConfigError, RideMatchConfig, ThreadCount};
pub use ridematch_core::{
    InputLine, Interval, Offer, ParseError, PaymentMethod, Query, RideMatchError,
};
pub use ridematch_engine::{read_request, MatchOutcome, MatchRequest, MatchStats, OfferMatcher};

pub mod prelude {
    pub use super::{Interval, Offer, PaymentMethod, Query};
    pub use super::{OfferMatcher, RideMatchConfig, ThreadCount};
}
