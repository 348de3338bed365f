pub mod http;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("QUOTE_API_KEY is not configured")]
    MissingApiKey,

    #[error("QUOTE_API_KEY is not a valid header value")]
    InvalidApiKey,

    #[error("quote request failed: {0}")]
    Transport(reqwest::Error),

    #[error("quote service HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("quote payload has no price field: {0}")]
    MissingPrice(String),

    #[error("quote price is not a positive number: {0}")]
    InvalidPrice(String),
}

impl QuoteError {
    /// Drops the request URL so nothing query-borne reaches logs.
    pub fn transport(err: reqwest::Error) -> Self {
        QuoteError::Transport(err.without_url())
    }
}

/// Latest trade price lookup by ticker.
#[async_trait::async_trait]
pub trait QuoteProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn fetch_price(&self, ticker: &str) -> Result<f64, QuoteError>;
}
