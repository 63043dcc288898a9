//! Drink model
//!
//! One reported beverage in a drinking session.

use serde::{Deserialize, Serialize};

/// Drink type enum (informational only, the estimate does not depend on it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    #[default]
    Beer,
    Wine,
    Spirits,
    Other,
}

impl DrinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkType::Beer => "beer",
            DrinkType::Wine => "wine",
            DrinkType::Spirits => "spirits",
            DrinkType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beer" | "cider" => Some(DrinkType::Beer),
            "wine" => Some(DrinkType::Wine),
            "spirits" | "spirit" | "liquor" | "shot" => Some(DrinkType::Spirits),
            "other" => Some(DrinkType::Other),
            _ => None,
        }
    }
}

/// A reported beverage: `count` servings of `volume_ml` at `abv_percent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkEntry {
    #[serde(default)]
    pub drink_type: DrinkType,
    pub count: f64,
    pub volume_ml: f64,
    pub abv_percent: f64,
}

impl DrinkEntry {
    pub fn new(drink_type: DrinkType, count: f64, volume_ml: f64, abv_percent: f64) -> Self {
        Self {
            drink_type,
            count,
            volume_ml,
            abv_percent,
        }
    }

    /// Whether every numeric field is positive, i.e. the entry adds alcohol mass
    pub fn is_countable(&self) -> bool {
        self.count > 0.0 && self.volume_ml > 0.0 && self.abv_percent > 0.0
    }

    /// Stricter than [`is_countable`](Self::is_countable): also rejects NaN/infinite fields
    pub fn is_valid(&self) -> bool {
        self.is_countable()
            && self.count.is_finite()
            && self.volume_ml.is_finite()
            && self.abv_percent.is_finite()
    }
}

impl Default for DrinkEntry {
    /// Two 330 ml beers at 5%
    fn default() -> Self {
        Self::new(DrinkType::Beer, 2.0, 330.0, 5.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drink() {
        let drink = DrinkEntry::default();
        assert_eq!(drink.drink_type, DrinkType::Beer);
        assert_eq!(drink.count, 2.0);
        assert_eq!(drink.volume_ml, 330.0);
        assert_eq!(drink.abv_percent, 5.0);
        assert!(drink.is_valid());
    }

    #[test]
    fn test_countable_requires_all_positive() {
        assert!(!DrinkEntry::new(DrinkType::Wine, 0.0, 150.0, 12.0).is_countable());
        assert!(!DrinkEntry::new(DrinkType::Wine, 1.0, -150.0, 12.0).is_countable());
        assert!(!DrinkEntry::new(DrinkType::Wine, 1.0, 150.0, 0.0).is_countable());
        assert!(DrinkEntry::new(DrinkType::Wine, 1.0, 150.0, 12.0).is_countable());
    }

    #[test]
    fn test_valid_rejects_infinite() {
        let drink = DrinkEntry::new(DrinkType::Spirits, f64::INFINITY, 40.0, 40.0);
        assert!(drink.is_countable());
        assert!(!drink.is_valid());
    }

    #[test]
    fn test_drink_type_from_str() {
        assert_eq!(DrinkType::from_str("Wine"), Some(DrinkType::Wine));
        assert_eq!(DrinkType::from_str("liquor"), Some(DrinkType::Spirits));
        assert_eq!(DrinkType::from_str("juice"), None);
    }

    #[test]
    fn test_drink_type_from_str_trims() {
        assert_eq!(DrinkType::from_str("  spirits\n"), Some(DrinkType::Spirits));
        assert_eq!(DrinkType::from_str(" Beer "), Some(DrinkType::Beer));
    }

    #[test]
    fn test_deserialize_without_type() {
        let drink: DrinkEntry =
            serde_json::from_str(r#"{"count": 1, "volume_ml": 500, "abv_percent": 4.5}"#).unwrap();
        assert_eq!(drink.drink_type, DrinkType::Beer);
        assert_eq!(drink.volume_ml, 500.0);
    }
}
