//! Error types for RideMatch

use thiserror::Error;

/// Error raised while parsing a single token or line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `from-to` token that does not split into two integers
    #[error("Malformed interval '{0}': expected 'from-to' with two integers")]
    MalformedInterval(String),

    /// A payment token outside of `card`, `cash` and `any`
    #[error("Invalid payment method '{0}': expected one of card, cash, any")]
    InvalidPaymentMethod(String),

    /// Wrong field count or a non-integer numeric field
    #[error("Malformed line: {0}")]
    MalformedLine(String),
}

/// Main error type for RideMatch operations
#[derive(Debug, Error)]
pub enum RideMatchError {
    /// A line of input could not be parsed
    #[error("Line {line_number}: {source}")]
    Parse {
        /// 1-based position of the offending line.
        line_number: usize,
        #[source]
        source: ParseError,
    },

    /// The input ended before a query line was read
    #[error("Input ended after {offers_loaded} offer(s) without a query line")]
    UnexpectedEndOfInput { offers_loaded: usize },

    /// Reading the input failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RideMatchError {
    /// Attaches a line number to a parse error.
    pub fn at_line(line_number: usize, source: ParseError) -> Self {
        RideMatchError::Parse {
            line_number,
            source,
        }
    }
}

/// Result type alias for RideMatch operations
pub type Result<T> = std::result::Result<T, RideMatchError>;
