use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Largest integer an f64 represents exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A caller-supplied number (budget, amount, duration).
///
/// Accepts a JSON number or a numeric string. Integral values serialize back
/// as JSON integers so echoed inputs keep the shape the caller sent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(pub f64);

impl Amount {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Zero and NaN count as "not provided".
    pub fn is_provided(self) -> bool {
        self.0 != 0.0 && !self.0.is_nan()
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Other(IgnoredAny),
        }

        // Unparseable text and non-numeric values are kept as NaN and
        // rejected later as not provided.
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Amount(n),
            Raw::Text(s) => Amount(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
            Raw::Other(_) => Amount(f64::NAN),
        })
    }
}

/// Lenient text field: strings pass through, numbers and `true` are
/// stringified, anything else (null, false, arrays, objects) is absent.
pub fn lenient_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => Some(s),
        Raw::Number(n) => Some(n.to_string()),
        Raw::Flag(true) => Some("true".to_string()),
        Raw::Flag(false) | Raw::Other(_) => None,
    })
}

/// Serializes integral values as integers, everything else as floats.
pub fn serialize_number<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let v = *v;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(v as i64)
    } else {
        serializer.serialize_f64(v)
    }
}

/// Half-up rounding (`floor(x + 0.5)`), so -2.5 rounds to -2.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "lenient_text")]
        risk: Option<String>,
        #[serde(default)]
        budget: Option<Amount>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let a: Amount = serde_json::from_value(json!(1500)).unwrap();
        assert_eq!(a.value(), 1500.0);

        let b: Amount = serde_json::from_value(json!(" 2500.5 ")).unwrap();
        assert_eq!(b.value(), 2500.5);
    }

    #[test]
    fn zero_nan_and_garbage_are_not_provided() {
        assert!(!Amount(0.0).is_provided());
        assert!(!Amount(f64::NAN).is_provided());

        let garbage: Amount = serde_json::from_value(json!("lots")).unwrap();
        assert!(!garbage.is_provided());

        let flag: Amount = serde_json::from_value(json!(true)).unwrap();
        assert!(!flag.is_provided());

        assert!(Amount(-10.0).is_provided());
    }

    #[test]
    fn text_fields_tolerate_other_json_types() {
        let body: Body = serde_json::from_value(json!({"risk": 1, "budget": [1]})).unwrap();
        assert_eq!(body.risk.as_deref(), Some("1"));
        assert!(!body.budget.unwrap().is_provided());

        let body: Body = serde_json::from_value(json!({"risk": {"tier": "low"}})).unwrap();
        assert_eq!(body.risk, None);
        assert_eq!(body.budget, None);

        let body: Body = serde_json::from_value(json!({"risk": false})).unwrap();
        assert_eq!(body.risk, None);
    }

    #[test]
    fn integral_values_serialize_as_integers() {
        assert_eq!(serde_json::to_value(Amount(1000.0)).unwrap(), json!(1000));
        assert_eq!(serde_json::to_value(Amount(12.5)).unwrap(), json!(12.5));
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(1049.4), 1049.0);
    }
}
