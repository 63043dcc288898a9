//! Country and legal limit models
//!
//! Supported jurisdictions and their drink-driving BAC limits.

use serde::{Deserialize, Serialize};

/// Supported jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Us,
    Uk,
    Au,
    Ca,
    Nz,
    Ma,
    Dz,
}

impl CountryCode {
    pub const ALL: [CountryCode; 7] = [
        CountryCode::Us,
        CountryCode::Uk,
        CountryCode::Au,
        CountryCode::Ca,
        CountryCode::Nz,
        CountryCode::Ma,
        CountryCode::Dz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Uk => "UK",
            CountryCode::Au => "AU",
            CountryCode::Ca => "CA",
            CountryCode::Nz => "NZ",
            CountryCode::Ma => "MA",
            CountryCode::Dz => "DZ",
        }
    }

    /// Parse a two-letter code, case-insensitive. `GB` is accepted for the UK.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "US" => Some(CountryCode::Us),
            "UK" | "GB" => Some(CountryCode::Uk),
            "AU" => Some(CountryCode::Au),
            "CA" => Some(CountryCode::Ca),
            "NZ" => Some(CountryCode::Nz),
            "MA" => Some(CountryCode::Ma),
            "DZ" => Some(CountryCode::Dz),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CountryCode::Us => "United States",
            CountryCode::Uk => "United Kingdom",
            CountryCode::Au => "Australia",
            CountryCode::Ca => "Canada",
            CountryCode::Nz => "New Zealand",
            CountryCode::Ma => "Morocco",
            CountryCode::Dz => "Algeria",
        }
    }
}

/// Which driver category a limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitCategory {
    General,
    Novice,
    Professional,
}

/// Legal BAC limits for one jurisdiction, in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalLimit {
    pub country_code: CountryCode,
    /// None when the limit is unknown
    pub general: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novice: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional: Option<f64>,
    pub notes: &'static str,
}

impl LegalLimit {
    /// Limit for a driver category, falling back to the general limit
    pub fn for_category(&self, category: LimitCategory) -> Option<f64> {
        match category {
            LimitCategory::General => self.general,
            LimitCategory::Novice => self.novice.or(self.general),
            LimitCategory::Professional => self.professional.or(self.general),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_round_trip() {
        for code in CountryCode::ALL {
            assert_eq!(CountryCode::from_str(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_country_code_aliases() {
        assert_eq!(CountryCode::from_str("gb"), Some(CountryCode::Uk));
        assert_eq!(CountryCode::from_str(" nz "), Some(CountryCode::Nz));
        assert_eq!(CountryCode::from_str("FR"), None);
    }

    #[test]
    fn test_country_code_serde() {
        let json = serde_json::to_string(&CountryCode::Nz).unwrap();
        assert_eq!(json, "\"NZ\"");
        let code: CountryCode = serde_json::from_str("\"DZ\"").unwrap();
        assert_eq!(code, CountryCode::Dz);
    }

    #[test]
    fn test_limit_category_fallback() {
        let limit = LegalLimit {
            country_code: CountryCode::Us,
            general: Some(0.08),
            novice: None,
            professional: Some(0.04),
            notes: "",
        };
        assert_eq!(limit.for_category(LimitCategory::General), Some(0.08));
        assert_eq!(limit.for_category(LimitCategory::Novice), Some(0.08));
        assert_eq!(limit.for_category(LimitCategory::Professional), Some(0.04));
    }
}
