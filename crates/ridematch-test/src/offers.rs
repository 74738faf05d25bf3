//! Offer fixtures.
//!
//! # Example
//!
//! ```
//! use ridematch_core::{Interval, PaymentMethod};
//! use ridematch_test::offers::OfferBuilder;
//!
//! let offer = OfferBuilder::new("Night Owl")
//!     .price(Interval::new(300, 900))
//!     .payment(PaymentMethod::Cash)
//!     .build();
//! assert_eq!(offer.service_name(), "Night Owl");
//! ```

use ridematch_core::{Interval, Offer, PaymentMethod};

/// Builds offers that accept everything unless narrowed.
#[derive(Clone, Debug)]
pub struct OfferBuilder {
    name: String,
    arrival: Interval,
    price: Interval,
    ride_time: Interval,
    payment: PaymentMethod,
}

impl OfferBuilder {
    /// Creates a builder with `0-1000` intervals and `any` payment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival: Interval::new(0, 1000),
            price: Interval::new(0, 1000),
            ride_time: Interval::new(0, 1000),
            payment: PaymentMethod::Any,
        }
    }

    /// Narrows the accepted arrival times.
    pub fn arrival(mut self, interval: Interval) -> Self {
        self.arrival = interval;
        self
    }

    /// Narrows the accepted prices.
    pub fn price(mut self, interval: Interval) -> Self {
        self.price = interval;
        self
    }

    /// Narrows the accepted ride durations.
    pub fn ride_time(mut self, interval: Interval) -> Self {
        self.ride_time = interval;
        self
    }

    /// Sets the accepted payment method.
    pub fn payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    /// Builds the offer.
    pub fn build(self) -> Offer {
        Offer::new(self.name, self.arrival, self.price, self.ride_time, self.payment)
    }
}

/// `FastCab, 1-10, 100-500, 5-30, card`
pub fn fast_cab() -> Offer {
    OfferBuilder::new("FastCab")
        .arrival(Interval::new(1, 10))
        .price(Interval::new(100, 500))
        .ride_time(Interval::new(5, 30))
        .payment(PaymentMethod::Card)
        .build()
}

/// `EcoRide, 1-10, 100-500, 5-30, cash`
pub fn eco_ride() -> Offer {
    OfferBuilder::new("EcoRide")
        .arrival(Interval::new(1, 10))
        .price(Interval::new(100, 500))
        .ride_time(Interval::new(5, 30))
        .payment(PaymentMethod::Cash)
        .build()
}
