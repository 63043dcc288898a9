//! Estimate models
//!
//! Output records of the estimation engine.

use serde::Serialize;

use super::CountryCode;

/// Risk band for a BAC value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Translation key for the risk message shown to the user
    pub fn message_key(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk.low",
            RiskLevel::Medium => "risk.medium",
            RiskLevel::High => "risk.high",
        }
    }
}

/// Risk level plus the message identifier the presentation layer looks up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskClassification {
    pub level: RiskLevel,
    pub message_key: &'static str,
}

impl From<RiskLevel> for RiskClassification {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            message_key: level.message_key(),
        }
    }
}

/// Estimated BAC for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacEstimate {
    /// Percent BAC, non-negative, rounded to 3 decimals
    pub bac_percent: f64,
    pub country_code: CountryCode,
    pub legal_limit: Option<f64>,
    /// None exactly when `legal_limit` is None
    pub over_legal_limit: Option<bool>,
    pub risk: RiskClassification,
}

/// An ordered `(low, high)` range of hours
pub type HoursRange = (f64, f64);

/// Projected hours until BAC reaches zero and the legal limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeToZeroEstimate {
    pub current_bac_percent: f64,
    pub to_zero_hours_range: Option<HoursRange>,
    pub to_legal_limit_hours_range: Option<HoursRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_classification_from_level() {
        let risk = RiskClassification::from(RiskLevel::Medium);
        assert_eq!(risk.level, RiskLevel::Medium);
        assert_eq!(risk.message_key, "risk.medium");
    }

    #[test]
    fn test_time_to_zero_serializes_ranges_as_arrays() {
        let estimate = TimeToZeroEstimate {
            current_bac_percent: 0.08,
            to_zero_hours_range: Some((4.0, 8.0)),
            to_legal_limit_hours_range: None,
        };
        let value = serde_json::to_value(&estimate).unwrap();
        assert_eq!(value["to_zero_hours_range"], serde_json::json!([4.0, 8.0]));
        assert!(value["to_legal_limit_hours_range"].is_null());
    }
}
