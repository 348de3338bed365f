//! Weighted stock advisor: scores the universe against the caller's risk,
//! style and horizon, and splits the budget evenly over the top picks.

use serde::{Deserialize, Serialize};

use super::{provided, AdvisorError};
use crate::catalog::STOCK_UNIVERSE;
use crate::domain::amount::{lenient_text, Amount};
use crate::domain::stock::{Region, StockRecord, Style};

const DISCLAIMER: &str = "This is an educational model using example stocks that trade on platforms similar to eToro and Trading 212. This is not financial advice.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisorRequest {
    pub budget: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub risk: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub market: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub horizon: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreCriteria<'a> {
    pub risk: &'a str,
    pub horizon: &'a str,
    pub style: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorInput {
    pub budget: Amount,
    pub risk: String,
    pub market: String,
    pub horizon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredStock {
    #[serde(flatten)]
    pub stock: &'static StockRecord,
    pub score: f64,
    pub suggested_allocation: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorResponse {
    pub input: AdvisorInput,
    pub allocation_per_stock: i64,
    pub picks: Vec<ScoredStock>,
    pub disclaimer: &'static str,
}

/// Additive match score of one record against the criteria.
pub fn score_stock(stock: &StockRecord, criteria: &ScoreCriteria<'_>) -> f64 {
    let mut score = 0.0;

    if criteria.risk == stock.risk.as_str() {
        score += 2.0;
    } else if criteria.risk == "medium" {
        score += 1.0;
    }

    let stock_style = stock.style.map(Style::as_str);
    if criteria.style.is_none() || criteria.style == stock_style {
        score += 2.0;
    }

    if Some(Style::tilt_for_horizon(criteria.horizon).as_str()) == stock_style {
        score += 1.0;
    }

    // Defensive sectors get a small bump.
    if stock.sector.contains("Consumer") || stock.sector.contains("Bank") {
        score += 0.5;
    }

    score
}

/// Records listed on `market`. "GLOBAL", unknown markets, and markets with
/// no listings all yield the whole catalog.
pub fn candidates<'a>(catalog: &'a [StockRecord], market: &str) -> Vec<&'a StockRecord> {
    let filtered: Vec<_> = match Region::parse(market) {
        Some(region) => catalog.iter().filter(|s| s.region == Some(region)).collect(),
        None => catalog.iter().collect(),
    };

    if filtered.is_empty() {
        catalog.iter().collect()
    } else {
        filtered
    }
}

pub fn pick_count(budget: f64) -> usize {
    if budget < 1500.0 {
        3
    } else if budget < 5000.0 {
        4
    } else {
        6
    }
}

pub fn recommend(req: AdvisorRequest) -> Result<AdvisorResponse, AdvisorError> {
    recommend_from(STOCK_UNIVERSE, req)
}

pub fn recommend_from(
    catalog: &'static [StockRecord],
    req: AdvisorRequest,
) -> Result<AdvisorResponse, AdvisorError> {
    let missing = AdvisorError::MissingFields("budget, risk, market and horizon");
    let budget = req.budget.filter(|b| b.is_provided()).ok_or(missing.clone())?;
    let risk = provided(&req.risk).ok_or(missing.clone())?;
    let market = provided(&req.market).ok_or(missing.clone())?;
    let horizon = provided(&req.horizon).ok_or(missing)?;
    let style = provided(&req.style);

    let market = market.to_uppercase();
    let criteria = ScoreCriteria {
        risk,
        horizon,
        style,
    };

    let mut scored: Vec<(&'static StockRecord, f64)> = candidates(catalog, &market)
        .into_iter()
        .map(|s| (s, score_stock(s, &criteria)))
        .collect();
    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(pick_count(budget.value()));

    if scored.is_empty() {
        return Err(AdvisorError::NoSuitableStocks);
    }

    let per_stock = (budget.value() / scored.len() as f64).floor() as i64;

    Ok(AdvisorResponse {
        input: AdvisorInput {
            budget,
            risk: risk.to_string(),
            market,
            horizon: horizon.to_string(),
            style: style.map(str::to_string),
        },
        allocation_per_stock: per_stock,
        picks: scored
            .into_iter()
            .map(|(stock, score)| ScoredStock {
                stock,
                score,
                suggested_allocation: per_stock,
            })
            .collect(),
        disclaimer: DISCLAIMER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(v: serde_json::Value) -> AdvisorRequest {
        serde_json::from_value(v).unwrap()
    }

    fn tickers(resp: &AdvisorResponse) -> Vec<&'static str> {
        resp.picks.iter().map(|p| p.stock.ticker).collect()
    }

    #[test]
    fn scores_each_component() {
        let lloyds = STOCK_UNIVERSE.iter().find(|s| s.ticker == "LLOY.L").unwrap();
        let criteria = ScoreCriteria {
            risk: "medium",
            horizon: "short",
            style: Some("income"),
        };
        // risk 2 + style 2 + tilt 1 + bank 0.5
        assert_eq!(score_stock(lloyds, &criteria), 5.5);

        let nvda = STOCK_UNIVERSE.iter().find(|s| s.ticker == "NVDA").unwrap();
        // medium fallback 1, style mismatch 0, tilt mismatch 0
        assert_eq!(score_stock(nvda, &criteria), 1.0);

        let unmatched_style = ScoreCriteria {
            risk: "low",
            horizon: "long",
            style: Some("value"),
        };
        assert_eq!(score_stock(nvda, &unmatched_style), 1.0);
    }

    #[test]
    fn sector_bonus_is_case_sensitive() {
        let mut record = STOCK_UNIVERSE[0].clone();
        record.sector = "consumer banking";
        let criteria = ScoreCriteria {
            risk: "x",
            horizon: "x",
            style: Some("x"),
        };
        assert_eq!(score_stock(&record, &criteria), 0.0);
    }

    #[test]
    fn global_and_unknown_markets_use_the_whole_catalog() {
        assert_eq!(candidates(STOCK_UNIVERSE, "GLOBAL").len(), STOCK_UNIVERSE.len());
        assert_eq!(candidates(STOCK_UNIVERSE, "MARS").len(), STOCK_UNIVERSE.len());
        // Known region without listings falls back too.
        assert_eq!(candidates(STOCK_UNIVERSE, "eu").len(), STOCK_UNIVERSE.len());
        assert_eq!(candidates(STOCK_UNIVERSE, "uk").len(), 4);
    }

    #[test]
    fn pick_count_follows_budget_bands() {
        assert_eq!(pick_count(1499.0), 3);
        assert_eq!(pick_count(1500.0), 4);
        assert_eq!(pick_count(4999.99), 4);
        assert_eq!(pick_count(5000.0), 6);
    }

    #[test]
    fn high_risk_long_horizon_small_budget() {
        let resp = recommend(request(json!({
            "budget": 1000, "risk": "high", "market": "global", "horizon": "long"
        })))
        .unwrap();

        assert_eq!(tickers(&resp), vec!["NVDA", "TSLA", "SMT.L"]);
        assert_eq!(resp.allocation_per_stock, 333);
        assert!(resp.picks.iter().all(|p| p.suggested_allocation == 333));
        assert_eq!(resp.input.market, "GLOBAL");
    }

    #[test]
    fn ties_keep_catalog_order() {
        let resp = recommend(request(json!({
            "budget": 5000, "risk": "low", "market": "GLOBAL", "horizon": "medium"
        })))
        .unwrap();

        assert_eq!(
            tickers(&resp),
            vec!["MSFT", "KO", "ULVR.L", "1120.SR", "2222.SR", "AAPL"]
        );
        assert_eq!(resp.allocation_per_stock, 833);
    }

    #[test]
    fn regional_picks_capped_by_region_size() {
        let resp = recommend(request(json!({
            "budget": 2000, "risk": "medium", "market": "uk", "horizon": "short", "style": "income"
        })))
        .unwrap();

        assert_eq!(tickers(&resp), vec!["LLOY.L", "ULVR.L", "BP.L", "SMT.L"]);
        assert_eq!(resp.allocation_per_stock, 500);
        assert_eq!(resp.input.style.as_deref(), Some("income"));
    }

    #[test]
    fn large_budget_on_unmatched_region_picks_six() {
        let resp = recommend(request(json!({
            "budget": 12000, "risk": "medium", "market": "EU", "horizon": "long"
        })))
        .unwrap();
        assert_eq!(resp.picks.len(), 6);
        assert_eq!(resp.allocation_per_stock, 2000);
    }

    #[test]
    fn empty_catalog_has_no_suitable_stocks() {
        let err = recommend_from(
            &[],
            request(json!({"budget": 1000, "risk": "low", "market": "USA", "horizon": "short"})),
        )
        .unwrap_err();
        assert_eq!(err, AdvisorError::NoSuitableStocks);
    }

    #[test]
    fn wrong_typed_fields_are_still_served() {
        let resp = recommend(request(json!({
            "budget": 1000, "risk": "high", "market": "GLOBAL", "horizon": "long", "style": 5
        })))
        .unwrap();

        // "5" matches no style, so only risk, tilt and sector contribute.
        assert_eq!(resp.input.style.as_deref(), Some("5"));
        assert_eq!(resp.picks[0].stock.ticker, "NVDA");
        assert_eq!(resp.picks[0].score, 3.0);

        let err = recommend(request(json!({
            "budget": 1000, "risk": null, "market": "USA", "horizon": "long"
        })))
        .unwrap_err();
        assert!(matches!(err, AdvisorError::MissingFields(_)));
    }

    #[test]
    fn requires_budget_risk_market_and_horizon() {
        let err = recommend(request(json!({"budget": 1000, "risk": "low", "horizon": "short"})))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please provide budget, risk, market and horizon."
        );
    }

    #[test]
    fn serializes_picks_with_record_fields() {
        let resp = recommend(request(json!({
            "budget": 1000, "risk": "high", "market": "USA", "horizon": "long"
        })))
        .unwrap();
        let v = serde_json::to_value(&resp).unwrap();

        assert_eq!(v["allocationPerStock"], json!(333));
        assert_eq!(v["picks"][0]["ticker"], json!("NVDA"));
        assert_eq!(v["picks"][0]["region"], json!("USA"));
        assert_eq!(v["picks"][0]["risk"], json!("high"));
        assert_eq!(v["picks"][0]["style"], json!("growth"));
        assert_eq!(v["picks"][0]["suggestedAllocation"], json!(333));
        assert!(v["input"].get("style").is_none());
    }
}
