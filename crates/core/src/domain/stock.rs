use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Tier filter shared by the simple and live pickers: "high" and "low"
    /// select only their own tier, anything else selects low or medium.
    pub fn admitted_by(self, requested: &str) -> bool {
        match requested {
            "high" => self == RiskTier::High,
            "low" => self == RiskTier::Low,
            _ => matches!(self, RiskTier::Low | RiskTier::Medium),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "SAUDI")]
    Saudi,
    #[serde(rename = "EU")]
    Eu,
}

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Usa => "USA",
            Region::Uk => "UK",
            Region::Saudi => "SAUDI",
            Region::Eu => "EU",
        }
    }

    /// Case-insensitive lookup; `None` for unknown keys (including "GLOBAL").
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_uppercase().as_str() {
            "USA" => Some(Region::Usa),
            "UK" => Some(Region::Uk),
            "SAUDI" => Some(Region::Saudi),
            "EU" => Some(Region::Eu),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Growth,
    Income,
    Balanced,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Growth => "growth",
            Style::Income => "income",
            Style::Balanced => "balanced",
        }
    }

    /// Style tilt implied by an investment horizon. Unknown horizons tilt to growth.
    pub fn tilt_for_horizon(horizon: &str) -> Self {
        match horizon {
            "short" => Style::Income,
            "medium" => Style::Balanced,
            _ => Style::Growth,
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRecord {
    pub ticker: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub sector: &'static str,
    pub risk: RiskTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<&'static str>,
}
