//! RideMatch Core - Offer and query types for ride-hailing matching
//!
//! This crate provides the building blocks the matching engine evaluates:
//! - [`Interval`] criteria over integer trip dimensions
//! - [`PaymentMethod`] with wildcard-aware compatibility
//! - [`Offer`] bundling the criteria of one service
//! - [`Query`] describing the rider's requested trip
//! - [`InputLine`] parsing for the line-oriented input format

pub mod error;
pub mod interval;
pub mod line;
pub mod offer;
pub mod payment;
pub mod query;


pub use error::{ParseError, Result, RideMatchError};
pub use interval::Interval;
pub use line::InputLine;
pub use offer::Offer;
pub use payment::PaymentMethod;
pub use query::Query;
