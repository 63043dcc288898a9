//! Combined result reports
//!
//! Bundles an estimate with its time-to-zero projection and a reading in the
//! caller's display unit.

use serde::Serialize;

use super::calculation::{estimate_bac, estimate_time_to_zero};
use super::constants::legal_limit;
use super::units::{convert_bac, round_to, BacUnit};
use crate::models::{BacEstimate, CountryCode, EstimationInput, LegalLimit, TimeToZeroEstimate};

/// A BAC value in a specific unit, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BacReading {
    pub value: f64,
    pub unit: BacUnit,
    pub symbol: &'static str,
}

impl BacReading {
    /// Convert a percent value to `unit` at that unit's display precision
    pub fn from_percent(percent: f64, unit: BacUnit) -> Self {
        let value = round_to(
            convert_bac(percent, BacUnit::Percent, unit),
            unit.display_precision(),
        );
        Self {
            value,
            unit,
            symbol: unit.symbol(),
        }
    }

    /// The same value in every supported unit
    pub fn all_units(percent: f64) -> Vec<Self> {
        BacUnit::ALL
            .iter()
            .map(|&unit| Self::from_percent(percent, unit))
            .collect()
    }

    pub fn format(&self) -> String {
        match self.unit {
            BacUnit::MgPerDl => format!("{:.1} {}", self.value, self.symbol),
            _ => format!("{:.3}{}", self.value, self.symbol),
        }
    }
}

/// Full result of an estimate
#[derive(Debug, Clone, Serialize)]
pub struct BacReport {
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<BacEstimate>,
    pub time_to_zero: TimeToZeroEstimate,
    pub reading: BacReading,
    pub legal: Option<&'static LegalLimit>,
}

impl BacReport {
    /// Estimate BAC for `input` and project time to zero from the result
    pub fn build(input: &EstimationInput, display_unit: BacUnit) -> Self {
        let estimate = estimate_bac(input);
        let time_to_zero = estimate_time_to_zero(estimate.bac_percent, estimate.legal_limit);
        let reading = BacReading::from_percent(estimate.bac_percent, display_unit);

        Self {
            generated_at: now_timestamp(),
            legal: legal_limit(input.country_code),
            estimate: Some(estimate),
            time_to_zero,
            reading,
        }
    }

    /// Time-to-zero report for a measured reading in any unit
    pub fn for_reading(value: f64, unit: BacUnit, country: CountryCode) -> Self {
        let percent = convert_bac(value, unit, BacUnit::Percent);
        let legal = legal_limit(country);
        let time_to_zero = estimate_time_to_zero(percent, legal.and_then(|l| l.general));

        Self {
            generated_at: now_timestamp(),
            estimate: None,
            reading: BacReading::from_percent(time_to_zero.current_bac_percent, unit),
            time_to_zero,
            legal,
        }
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        let bac = self.time_to_zero.current_bac_percent;
        if bac <= 0.0 {
            return "Estimated BAC is zero.".to_string();
        }
        let mut summary = format!("Estimated BAC {:.3}%", bac);
        if let Some((low, high)) = self.time_to_zero.to_zero_hours_range {
            summary.push_str(&format!(", about {:.1}-{:.1} hours to zero", low, high));
        }
        if let Some((low, high)) = self.time_to_zero.to_legal_limit_hours_range {
            summary.push_str(&format!(
                ", {:.1}-{:.1} hours to the legal limit",
                low, high
            ));
            if let Some(legal) = self.legal {
                summary.push_str(" in ");
                summary.push_str(legal.country_code.display_name());
            }
        }
        summary.push('.');
        summary
    }
}

fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
