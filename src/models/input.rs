//! Estimation input model
//!
//! Biometrics, jurisdiction, and drink history for one estimate.

use serde::{Deserialize, Serialize};

use crate::bac::units::WeightUnit;

use super::{CountryCode, DrinkEntry};

/// Biological sex, selects the Widmark distribution ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Some(Sex::Male),
            "female" | "f" | "woman" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Input for a BAC estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub sex: Sex,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub country_code: CountryCode,
    /// Hours since the first drink
    pub elapsed_hours: f64,
    pub drinks: Vec<DrinkEntry>,
}

impl EstimationInput {
    /// Input with the calculator defaults: 75 kg, US, 2 hours, one default drink
    pub fn with_defaults(sex: Sex) -> Self {
        Self {
            sex,
            weight: 75.0,
            weight_unit: WeightUnit::Kg,
            country_code: CountryCode::Us,
            elapsed_hours: 2.0,
            drinks: vec![DrinkEntry::default()],
        }
    }
}

/// Combine an hours field and a minutes field into fractional hours
pub fn elapsed_from_parts(hours: f64, minutes: f64) -> f64 {
    hours + minutes / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_from_parts() {
        assert_eq!(elapsed_from_parts(2.0, 0.0), 2.0);
        assert_eq!(elapsed_from_parts(1.0, 30.0), 1.5);
        assert_eq!(elapsed_from_parts(0.0, 45.0), 0.75);
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!(Sex::from_str("Female"), Some(Sex::Female));
        assert_eq!(Sex::from_str("m"), Some(Sex::Male));
        assert_eq!(Sex::from_str("x"), None);
    }

    #[test]
    fn test_deserialize_input() {
        let json = r#"{
            "sex": "female",
            "weight": 140,
            "weight_unit": "lb",
            "country_code": "AU",
            "elapsed_hours": 1.5,
            "drinks": [
                {"drink_type": "wine", "count": 2, "volume_ml": 150, "abv_percent": 13}
            ]
        }"#;
        let input: EstimationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.weight_unit, WeightUnit::Lb);
        assert_eq!(input.country_code, CountryCode::Au);
        assert_eq!(input.drinks.len(), 1);
    }
}
