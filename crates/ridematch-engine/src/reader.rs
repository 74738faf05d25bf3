//! Reading offers and the query from a line-oriented stream.
//!
//! Offer lines are collected in order until the first query line. Reading
//! stops there: anything after the query is left unread.

use std::io::BufRead;

use ridematch_core::{InputLine, Offer, Query, Result, RideMatchError};
use tracing::{debug, info};

/// Everything a single run needs: the loaded offers and the rider query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    /// Offers in input order.
    pub offers: Vec<Offer>,
    /// The query that ended loading.
    pub query: Query,
}

/// Reads offer lines up to and including the first query line.
///
/// # Errors
///
/// Returns [`RideMatchError::Parse`] with the 1-based line number for the
/// first line that fails to parse, [`RideMatchError::UnexpectedEndOfInput`]
/// if the stream ends before a query, and [`RideMatchError::Io`] if reading
/// fails.
///
/// # Example
///
/// ```
/// use ridematch_engine::read_request;
///
/// let input = "FastCab, 1-10, 100-500, 5-30, card\n1, 200, 10, card\nignored";
/// let request = read_request(input.as_bytes()).unwrap();
/// assert_eq!(request.offers.len(), 1);
/// assert_eq!(request.query.price, 200);
/// ```
pub fn read_request<R: BufRead>(reader: R) -> Result<MatchRequest> {
    let mut offers = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match InputLine::parse(&line).map_err(|e| RideMatchError::at_line(line_number, e))? {
            InputLine::Offer(offer) => {
                if offer.is_unsatisfiable() {
                    debug!(
                        event = "unsatisfiable_offer",
                        line = line_number,
                        service = offer.service_name(),
                    );
                }
                offers.push(offer);
            }
            InputLine::Query(query) => {
                info!(event = "load_end", offers = offers.len(), query_line = line_number);
                return Ok(MatchRequest { offers, query });
            }
        }
    }

    Err(RideMatchError::UnexpectedEndOfInput {
        offers_loaded: offers.len(),
    })
}
