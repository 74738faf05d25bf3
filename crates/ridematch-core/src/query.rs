//! The rider's requested trip.

use std::fmt;

use crate::payment::PaymentMethod;

/// Concrete trip parameters tested against every offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Minutes until the car should arrive.
    pub car_arrive_time: i32,
    /// Price the rider is willing to pay.
    pub price: i32,
    /// Expected ride duration.
    pub ride_time: i32,
    /// How the rider intends to pay.
    pub payment_method: PaymentMethod,
}

impl Query {
    /// Creates a query from its four fields.
    pub const fn new(
        car_arrive_time: i32,
        price: i32,
        ride_time: i32,
        payment_method: PaymentMethod,
    ) -> Self {
        Query {
            car_arrive_time,
            price,
            ride_time,
            payment_method,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.car_arrive_time, self.price, self.ride_time, self.payment_method
        )
    }
}
