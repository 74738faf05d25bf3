//! Payment methods accepted by offers and requested by riders.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// How a rider pays, or which payments a service accepts.
///
/// `Any` is a wildcard on both sides of the comparison: an offer accepting
/// any payment matches every request, and a rider willing to pay any way
/// matches every offer.
///
/// # Examples
///
/// ```
/// use ridematch_core::PaymentMethod;
///
/// assert!(PaymentMethod::Any.can_pay_with(PaymentMethod::Card));
/// assert!(PaymentMethod::Card.can_pay_with(PaymentMethod::Any));
/// assert!(!PaymentMethod::Card.can_pay_with(PaymentMethod::Cash));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Card payment.
    Card,
    /// Cash payment.
    Cash,
    /// Either card or cash.
    Any,
}

impl PaymentMethod {
    /// Returns true if `requested` is compatible with this method.
    #[inline]
    pub const fn can_pay_with(self, requested: PaymentMethod) -> bool {
        matches!(
            (self, requested),
            (PaymentMethod::Any, _)
                | (_, PaymentMethod::Any)
                | (PaymentMethod::Card, PaymentMethod::Card)
                | (PaymentMethod::Cash, PaymentMethod::Cash)
        )
    }

    /// Returns the input token for this method.
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Any => "any",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            "any" => Ok(PaymentMethod::Any),
            other => Err(ParseError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Cash, PaymentMethod::Any];

    #[test]
    fn test_parse_trims() {
        assert_eq!(" card ".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("cash\t".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert_eq!("any".parse::<PaymentMethod>(), Ok(PaymentMethod::Any));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Card".parse::<PaymentMethod>(),
            Err(ParseError::InvalidPaymentMethod("Card".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            " crypto ".parse::<PaymentMethod>(),
            Err(ParseError::InvalidPaymentMethod("crypto".to_string()))
        );
        assert!("".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for method in ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn test_any_is_wildcard() {
        for method in ALL {
            assert!(PaymentMethod::Any.can_pay_with(method));
            assert!(method.can_pay_with(PaymentMethod::Any));
        }
    }

    #[test]
    fn test_compatibility_is_symmetric() {
        for a in ALL {
            for b in ALL {
                assert_eq!(a.can_pay_with(b), b.can_pay_with(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_card_and_cash_are_incompatible() {
        assert!(!PaymentMethod::Card.can_pay_with(PaymentMethod::Cash));
        assert!(!PaymentMethod::Cash.can_pay_with(PaymentMethod::Card));
        assert!(PaymentMethod::Cash.can_pay_with(PaymentMethod::Cash));
    }
}
