//! Risk-filtered picks within one region, sized against live prices.

use serde::{Deserialize, Serialize};

use super::filter::{filter_by_risk, MAX_PICKS};
use super::{provided, AdvisorError};
use crate::catalog::live_partition;
use crate::domain::amount::{lenient_text, round_half_up, serialize_number, Amount};
use crate::domain::stock::{Region, StockRecord};
use crate::quote::QuoteProvider;

const NOTE: &str = "Prices are fetched live and share counts are approximate. Stocks whose price could not be fetched are left out. This is not financial advice.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveRequest {
    pub budget: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub risk: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub horizon: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveInput {
    pub budget: Amount,
    pub risk: String,
    pub horizon: String,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePick {
    #[serde(flatten)]
    pub stock: &'static StockRecord,
    pub region: Region,
    #[serde(serialize_with = "serialize_number")]
    pub price: f64,
    pub suggested_budget: i64,
    pub approx_shares: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveResponse {
    pub input: LiveInput,
    pub picks: Vec<LivePick>,
    pub note: &'static str,
}

/// Unknown or missing region keys fall back to USA.
pub fn resolve_region(key: Option<&str>) -> Region {
    key.and_then(Region::parse).unwrap_or(Region::Usa)
}

/// Whole shares affordable at `price`, never negative.
pub fn approx_shares(per_stock_budget: f64, price: f64) -> i64 {
    (per_stock_budget / price).floor().max(0.0) as i64
}

/// Prices candidates one at a time. A failed lookup drops that candidate;
/// the per-stock budget is fixed from the pre-fetch candidate count.
pub async fn pick_live(
    req: LiveRequest,
    quotes: &dyn QuoteProvider,
) -> Result<LiveResponse, AdvisorError> {
    pick_live_from(live_partition, req, quotes).await
}

pub async fn pick_live_from(
    partition: fn(Region) -> &'static [StockRecord],
    req: LiveRequest,
    quotes: &dyn QuoteProvider,
) -> Result<LiveResponse, AdvisorError> {
    let missing = AdvisorError::MissingFields("budget, risk and horizon");
    let budget = req.budget.filter(|b| b.is_provided()).ok_or(missing.clone())?;
    let risk = provided(&req.risk).ok_or(missing.clone())?;
    let horizon = provided(&req.horizon).ok_or(missing)?;
    let region = resolve_region(provided(&req.region));

    let candidates = filter_by_risk(partition(region), risk, MAX_PICKS);
    if candidates.is_empty() {
        return Err(AdvisorError::NoRegionalMatches);
    }

    let per_stock = budget.value() / candidates.len() as f64;
    let mut picks = Vec::with_capacity(candidates.len());

    for stock in candidates {
        match quotes.fetch_price(stock.ticker).await {
            Ok(price) => picks.push(LivePick {
                stock,
                region,
                price,
                suggested_budget: round_half_up(per_stock) as i64,
                approx_shares: approx_shares(per_stock, price),
            }),
            Err(err) => {
                tracing::warn!(
                    ticker = stock.ticker,
                    region = region.as_str(),
                    provider = quotes.provider_name(),
                    error = %err,
                    "live price fetch failed; skipping stock"
                );
            }
        }
    }

    if picks.is_empty() {
        return Err(AdvisorError::NoLivePrices);
    }

    tracing::debug!(region = region.as_str(), picks = picks.len(), "live picks priced");

    Ok(LiveResponse {
        input: LiveInput {
            budget,
            risk: risk.to_string(),
            horizon: horizon.to_string(),
            region,
        },
        picks,
        note: NOTE,
    })
}
