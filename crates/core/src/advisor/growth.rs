use serde::{Deserialize, Serialize};

use super::{provided, AdvisorError};
use crate::domain::amount::{lenient_text, round_half_up, Amount};

const NOTE: &str = "This is a simplified demo projection. Real InvestMyMillion models will use deeper analysis and live data.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrowthRequest {
    pub amount: Option<Amount>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub risk: Option<String>,
    /// Months.
    pub duration: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthInput {
    pub amount: Amount,
    pub risk: String,
    pub duration: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    pub input: GrowthInput,
    pub projected_value: i64,
    pub note: &'static str,
}

/// Assumed annual growth rate for a risk string. Unknown strings are medium.
pub fn annual_rate(risk: &str) -> f64 {
    match risk {
        "high" => 0.15,
        "low" => 0.05,
        _ => 0.10,
    }
}

/// Compounds `amount` annually over `months / 12` years, rounded half-up.
/// Zero or negative durations are not rejected.
pub fn projected_value(amount: f64, risk: &str, months: f64) -> i64 {
    let years = months / 12.0;
    round_half_up(amount * (1.0 + annual_rate(risk)).powf(years)) as i64
}

pub fn project(req: GrowthRequest) -> Result<GrowthProjection, AdvisorError> {
    let missing = AdvisorError::MissingFields("amount, risk, and duration");
    let amount = req.amount.filter(|a| a.is_provided()).ok_or(missing.clone())?;
    let duration = req.duration.filter(|d| d.is_provided()).ok_or(missing.clone())?;
    let risk = provided(&req.risk).ok_or(missing)?;

    Ok(GrowthProjection {
        projected_value: projected_value(amount.value(), risk, duration.value()),
        input: GrowthInput {
            amount,
            risk: risk.to_string(),
            duration,
        },
        note: NOTE,
    })
}
