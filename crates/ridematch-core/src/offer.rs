//! Offers published by ride-hailing services.
//!
//! An offer is the acceptance criteria of one service: the trips it is
//! willing to take, expressed as three intervals and a payment method.

use crate::interval::Interval;
use crate::payment::PaymentMethod;
use crate::query::Query;

/// A named bundle of acceptance criteria.
///
/// Offers are immutable once built; the matcher only reads them.
///
/// # Example
///
/// ```
/// use ridematch_core::{Interval, Offer, PaymentMethod, Query};
///
/// let offer = Offer::new(
///     "FastCab",
///     Interval::new(1, 10),
///     Interval::new(100, 500),
///     Interval::new(5, 30),
///     PaymentMethod::Card,
/// );
///
/// assert!(offer.is_good_for(&Query::new(1, 200, 10, PaymentMethod::Card)));
/// assert!(!offer.is_good_for(&Query::new(1, 200, 10, PaymentMethod::Cash)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    service_name: String,
    arrival_interval: Interval,
    price_interval: Interval,
    ride_time_interval: Interval,
    payment_method: PaymentMethod,
}

impl Offer {
    /// Creates a new offer.
    pub fn new(
        service_name: impl Into<String>,
        arrival_interval: Interval,
        price_interval: Interval,
        ride_time_interval: Interval,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            arrival_interval,
            price_interval,
            ride_time_interval,
            payment_method,
        }
    }

    /// Returns the name printed for a match.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the accepted car arrival times.
    pub fn arrival_interval(&self) -> Interval {
        self.arrival_interval
    }

    /// Returns the accepted prices.
    pub fn price_interval(&self) -> Interval {
        self.price_interval
    }

    /// Returns the accepted ride durations.
    pub fn ride_time_interval(&self) -> Interval {
        self.ride_time_interval
    }

    /// Returns the accepted payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns true if every criterion accepts the query.
    #[inline]
    pub fn is_good_for(&self, query: &Query) -> bool {
        self.arrival_interval.includes(query.car_arrive_time)
            && self.price_interval.includes(query.price)
            && self.ride_time_interval.includes(query.ride_time)
            && self.payment_method.can_pay_with(query.payment_method)
    }

    /// Returns true if some criterion is an inverted interval, meaning the
    /// offer can never match.
    pub fn is_unsatisfiable(&self) -> bool {
        self.arrival_interval.is_empty()
            || self.price_interval.is_empty()
            || self.ride_time_interval.is_empty()
    }
}
