//! Request-level advisors. Each takes a decoded request body and returns
//! either a response body or an [`AdvisorError`] whose message is sent back
//! in-band with `ok: false`.

pub mod filter;
pub mod growth;
pub mod live;
pub mod scorer;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("Please provide {0}.")]
    MissingFields(&'static str),

    #[error("No suitable stocks found for this combination.")]
    NoSuitableStocks,

    #[error("No stocks match this risk level in the selected region.")]
    NoRegionalMatches,

    #[error("Could not fetch live prices for any of the selected stocks. Please try again later.")]
    NoLivePrices,
}

/// Empty strings count as missing.
pub(crate) fn provided(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
