//! Parsing of single input lines.
//!
//! Offer lines carry five comma-separated fields:
//! `name, from-to, from-to, from-to, payment`.
//! A query line carries four: `arrive, price, ride_time, payment`.
//! The field count alone decides which one a line is.

use crate::error::ParseError;
use crate::interval::Interval;
use crate::offer::Offer;
use crate::payment::PaymentMethod;
use crate::query::Query;

/// Number of fields on an offer line.
pub const OFFER_FIELD_COUNT: usize = 5;

/// Number of fields on a query line.
pub const QUERY_FIELD_COUNT: usize = 4;

/// A classified line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// An offer to append to the collection.
    Offer(Offer),
    /// The rider query that ends loading.
    Query(Query),
}

impl InputLine {
    /// Parses one line, without its terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridematch_core::{InputLine, PaymentMethod};
    ///
    /// let line = InputLine::parse("1, 200, 10, card").unwrap();
    /// let InputLine::Query(query) = line else { panic!("expected query") };
    /// assert_eq!(query.payment_method, PaymentMethod::Card);
    /// ```
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        match fields.as_slice() {
            [name, arrival, price, ride_time, payment] => Ok(InputLine::Offer(Offer::new(
                name.trim(),
                arrival.parse::<Interval>()?,
                price.parse::<Interval>()?,
                ride_time.parse::<Interval>()?,
                payment.parse::<PaymentMethod>()?,
            ))),
            [arrive, price, ride_time, payment] => Ok(InputLine::Query(Query::new(
                parse_int("car arrive time", arrive)?,
                parse_int("price", price)?,
                parse_int("ride time", ride_time)?,
                payment.parse::<PaymentMethod>()?,
            ))),
            _ => Err(ParseError::MalformedLine(format!(
                "expected {} fields for an offer or {} for a query, found {}",
                OFFER_FIELD_COUNT,
                QUERY_FIELD_COUNT,
                fields.len()
            ))),
        }
    }
}

fn parse_int(field: &str, raw: &str) -> Result<i32, ParseError> {
    let raw = raw.trim();
    raw.parse::<i32>().map_err(|e| {
        ParseError::MalformedLine(format!("{} '{}' is not an integer: {}", field, raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offer_line() {
        let line = InputLine::parse("FastCab, 1-10, 100-500, 5-30, card").unwrap();
        let expected = Offer::new(
            "FastCab",
            Interval::new(1, 10),
            Interval::new(100, 500),
            Interval::new(5, 30),
            PaymentMethod::Card,
        );
        assert_eq!(line, InputLine::Offer(expected));
    }

    #[test]
    fn test_parse_query_line() {
        let line = InputLine::parse(" 1 ,200, 10 ,any").unwrap();
        assert_eq!(
            line,
            InputLine::Query(Query::new(1, 200, 10, PaymentMethod::Any))
        );
    }

    #[test]
    fn test_service_name_keeps_inner_spaces() {
        let InputLine::Offer(offer) = InputLine::parse("  City Taxi ,1-2,1-2,1-2,cash").unwrap()
        else {
            panic!("expected offer");
        };
        assert_eq!(offer.service_name(), "City Taxi");
    }

    #[test]
    fn test_wrong_field_count() {
        for line in ["", "a", "1, 2, 3", "a, 1-2, 1-2, 1-2, card, extra"] {
            assert!(
                matches!(InputLine::parse(line), Err(ParseError::MalformedLine(_))),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn test_query_with_non_integer_field() {
        let err = InputLine::parse("1, cheap, 10, card").unwrap_err();
        let ParseError::MalformedLine(reason) = err else {
            panic!("expected malformed line");
        };
        assert!(reason.contains("price 'cheap'"));
    }

    #[test]
    fn test_offer_errors_are_typed() {
        assert_eq!(
            InputLine::parse("A, 1-10, 100_500, 5-30, card"),
            Err(ParseError::MalformedInterval("100_500".to_string()))
        );
        assert_eq!(
            InputLine::parse("A, 1-10, 100-500, 5-30, paypal"),
            Err(ParseError::InvalidPaymentMethod("paypal".to_string()))
        );
    }

    #[test]
    fn test_query_with_bad_payment() {
        assert_eq!(
            InputLine::parse("1, 200, 10, CARD"),
            Err(ParseError::InvalidPaymentMethod("CARD".to_string()))
        );
    }
}
