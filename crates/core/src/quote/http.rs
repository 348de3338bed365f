use crate::config::Settings;
use crate::quote::{QuoteError, QuoteProvider};
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";
const PRICE_PATH: &str = "/price";

/// `GET {base_url}/price?symbol=..` returning `{"price": "187.44"}`. The key
/// travels in the `Authorization` header so it never appears in the URL.
///
/// No retry and no explicit timeout: one request per lookup.
#[derive(Debug, Clone)]
pub struct HttpQuoteProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpQuoteProvider {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings
            .quote_api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, settings.quote_api_key.clone())
    }

    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build quote http client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PRICE_PATH)
    }

    fn headers(api_key: &str) -> Result<HeaderMap, QuoteError> {
        let mut value = HeaderValue::from_str(&format!("apikey {api_key}"))
            .map_err(|_| QuoteError::InvalidApiKey)?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

#[async_trait::async_trait]
impl QuoteProvider for HttpQuoteProvider {
    fn provider_name(&self) -> &'static str {
        "http_price"
    }

    async fn fetch_price(&self, ticker: &str) -> Result<f64, QuoteError> {
        let api_key = self.api_key.as_deref().ok_or(QuoteError::MissingApiKey)?;

        let res = self
            .http
            .get(self.url())
            .headers(Self::headers(api_key)?)
            .query(&[("symbol", ticker)])
            .send()
            .await
            .map_err(QuoteError::transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status));
        }

        let text = res.text().await.map_err(QuoteError::transport)?;
        let payload = serde_json::from_str::<Value>(&text)
            .map_err(|_| QuoteError::MissingPrice(text.clone()))?;
        parse_price(&payload)
    }
}

/// Accepts the price as a JSON number or numeric string.
fn parse_price(payload: &Value) -> Result<f64, QuoteError> {
    let raw = payload
        .get("price")
        .filter(|v| !v.is_null())
        .ok_or_else(|| QuoteError::MissingPrice(payload.to_string()))?;

    let price = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match price {
        Some(p) if p.is_finite() && p > 0.0 => Ok(p),
        _ => Err(QuoteError::InvalidPrice(raw.to_string())),
    }
}
