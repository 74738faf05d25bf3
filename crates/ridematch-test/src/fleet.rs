//! Seeded random fleets.
//!
//! Generated offers use small value ranges so that a random query matches
//! a meaningful fraction of them. Some intervals are inverted on purpose.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ridematch_core::{Interval, Offer, PaymentMethod, Query};

const PAYMENTS: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::Any];

fn random_interval(rng: &mut ChaCha8Rng, max: i32) -> Interval {
    let from = rng.random_range(0..=max);
    let to = rng.random_range(0..=max);
    // Keep roughly one in ten intervals inverted.
    if rng.random_range(0..10) == 0 {
        Interval::new(from.max(to) + 1, from.min(to))
    } else {
        Interval::new(from.min(to), from.max(to))
    }
}

/// Generates `count` offers named `svc-<index>`.
pub fn generate_fleet(count: usize, seed: u64) -> Vec<Offer> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Offer::new(
                format!("svc-{}", i),
                random_interval(&mut rng, 30),
                random_interval(&mut rng, 100),
                random_interval(&mut rng, 60),
                PAYMENTS[rng.random_range(0..PAYMENTS.len())],
            )
        })
        .collect()
}

/// Generates a query within the ranges used by [`generate_fleet`].
pub fn generate_query(seed: u64) -> Query {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Query::new(
        rng.random_range(0..=30),
        rng.random_range(0..=100),
        rng.random_range(0..=60),
        PAYMENTS[rng.random_range(0..PAYMENTS.len())],
    )
}

/// Straight sequential filter used as the expected answer.
pub fn reference_matches(offers: &[Offer], query: &Query) -> Vec<String> {
    offers
        .iter()
        .filter(|offer| offer.is_good_for(query))
        .map(|offer| offer.service_name().to_string())
        .collect()
}

/// Renders offers and a query in the line-oriented input format.
pub fn render_input(offers: &[Offer], query: &Query) -> String {
    let mut input = String::new();
    for offer in offers {
        input.push_str(&format!(
            "{}, {}, {}, {}, {}\n",
            offer.service_name(),
            offer.arrival_interval(),
            offer.price_interval(),
            offer.ride_time_interval(),
            offer.payment_method()
        ));
    }
    input.push_str(&format!("{}\n", query));
    input
}
