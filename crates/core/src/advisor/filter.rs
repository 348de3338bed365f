use serde::{Deserialize, Serialize};

use super::{provided, AdvisorError};
use crate::catalog::STOCK_UNIVERSE;
use crate::domain::amount::{lenient_text, round_half_up, Amount};
use crate::domain::stock::StockRecord;

pub const MAX_PICKS: usize = 3;

const NOTE: &str = "Demo picks from a fixed list of well-known stocks, filtered by risk only. This is not financial advice.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PicksRequest {
    pub budget: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub risk: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub horizon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PicksInput {
    pub budget: Amount,
    pub risk: String,
    pub horizon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPick {
    #[serde(flatten)]
    pub stock: &'static StockRecord,
    pub suggested_allocation: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PicksResponse {
    pub input: PicksInput,
    pub picks: Vec<RiskPick>,
    pub note: &'static str,
}

/// First `limit` records admitted by the tier filter, in declaration order.
pub fn filter_by_risk<'a>(
    catalog: &'a [StockRecord],
    risk: &str,
    limit: usize,
) -> Vec<&'a StockRecord> {
    catalog
        .iter()
        .filter(|s| s.risk.admitted_by(risk))
        .take(limit)
        .collect()
}

pub fn pick(req: PicksRequest) -> Result<PicksResponse, AdvisorError> {
    pick_from(STOCK_UNIVERSE, req)
}

pub fn pick_from(
    catalog: &'static [StockRecord],
    req: PicksRequest,
) -> Result<PicksResponse, AdvisorError> {
    let missing = AdvisorError::MissingFields("budget, risk and horizon");
    let budget = req.budget.filter(|b| b.is_provided()).ok_or(missing.clone())?;
    let risk = provided(&req.risk).ok_or(missing.clone())?;
    let horizon = provided(&req.horizon).ok_or(missing)?;

    let matches = filter_by_risk(catalog, risk, MAX_PICKS);
    if matches.is_empty() {
        return Err(AdvisorError::NoSuitableStocks);
    }
    let per_stock = round_half_up(budget.value() / matches.len() as f64) as i64;

    Ok(PicksResponse {
        input: PicksInput {
            budget,
            risk: risk.to_string(),
            horizon: horizon.to_string(),
        },
        picks: matches
            .into_iter()
            .map(|stock| RiskPick {
                stock,
                suggested_allocation: per_stock,
            })
            .collect(),
        note: NOTE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stock::RiskTier;
    use serde_json::json;

    fn request(v: serde_json::Value) -> PicksRequest {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn high_risk_returns_only_high_entries_in_order() {
        let resp = pick(request(json!({"budget": 3000, "risk": "high", "horizon": "long"}))).unwrap();

        let tickers: Vec<_> = resp.picks.iter().map(|p| p.stock.ticker).collect();
        assert_eq!(tickers, vec!["NVDA", "TSLA", "SMT.L"]);
        assert!(resp.picks.iter().all(|p| p.stock.risk == RiskTier::High));
        assert!(resp.picks.iter().all(|p| p.suggested_allocation == 1000));
    }

    #[test]
    fn unknown_risk_means_low_or_medium() {
        let picks = filter_by_risk(STOCK_UNIVERSE, "cautious", MAX_PICKS);
        let tickers: Vec<_> = picks.iter().map(|s| s.ticker).collect();
        assert_eq!(tickers, vec!["MSFT", "AAPL", "AMZN"]);
    }

    #[test]
    fn low_risk_allocation_is_rounded() {
        let resp = pick(request(json!({"budget": 1000, "risk": "low", "horizon": "short"}))).unwrap();
        let tickers: Vec<_> = resp.picks.iter().map(|p| p.stock.ticker).collect();
        assert_eq!(tickers, vec!["MSFT", "KO", "ULVR.L"]);
        assert_eq!(resp.picks[0].suggested_allocation, 333);

        let resp = pick(request(json!({"budget": 2000, "risk": "low", "horizon": "short"}))).unwrap();
        assert_eq!(resp.picks[0].suggested_allocation, 667);
    }

    #[test]
    fn horizon_is_echoed_but_unused() {
        let short = pick(request(json!({"budget": 900, "risk": "medium", "horizon": "short"}))).unwrap();
        let long = pick(request(json!({"budget": 900, "risk": "medium", "horizon": "long"}))).unwrap();
        assert_eq!(short.picks, long.picks);
        assert_eq!(long.input.horizon, "long");
    }

    #[test]
    fn catalog_without_the_tier_has_no_suitable_stocks() {
        let high_only: &'static [StockRecord] = &STOCK_UNIVERSE[2..4];
        let err = pick_from(
            high_only,
            request(json!({"budget": 900, "risk": "low", "horizon": "short"})),
        )
        .unwrap_err();
        assert_eq!(err, AdvisorError::NoSuitableStocks);
    }

    #[test]
    fn requires_all_fields() {
        let err = pick(request(json!({"budget": 900, "risk": "medium"}))).unwrap_err();
        assert_eq!(err.to_string(), "Please provide budget, risk and horizon.");
    }
}
