//! Shared test fixtures for RideMatch crates.
//!
//! This crate provides offer builders, generated fleets and a reference
//! matcher for testing.
//!
//! - [`offers`] - Offer builder and the canonical example offers
//! - [`fleet`] - Seeded random fleets and their input text
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! ridematch-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use ridematch_test::offers::{eco_ride, fast_cab, OfferBuilder};
//! use ridematch_test::fleet::{generate_fleet, reference_matches};
//! ```

pub mod fleet;
pub mod offers;

pub use fleet::{generate_fleet, generate_query, reference_matches, render_input};
pub use offers::{eco_ride, fast_cab, OfferBuilder};
