//! BAC estimation engine
//!
//! Widmark-style estimate of blood alcohol concentration from drink history,
//! plus risk classification and time-to-sober projection. Every function is
//! pure and infallible: degenerate inputs produce zeroed results.

use super::constants::{
    general_limit, ALCOHOL_DENSITY_G_PER_ML, DISTRIBUTION_RATIO_FEMALE, DISTRIBUTION_RATIO_MALE,
    ELIMINATION_RATE_DEFAULT, ELIMINATION_RATE_MAX, ELIMINATION_RATE_MIN, RISK_THRESHOLDS,
};
use super::units::{convert_weight, round_to, WeightUnit};
use crate::models::{
    BacEstimate, DrinkEntry, EstimationInput, HoursRange, RiskClassification, RiskLevel, Sex,
    TimeToZeroEstimate,
};

/// Widmark r factor for a sex
pub fn distribution_ratio(sex: Sex) -> f64 {
    match sex {
        Sex::Male => DISTRIBUTION_RATIO_MALE,
        Sex::Female => DISTRIBUTION_RATIO_FEMALE,
    }
}

/// Grams of pure alcohol in a drink list
///
/// Entries with a non-positive count, volume, or ABV contribute nothing.
pub fn calculate_alcohol_mass_grams(drinks: &[DrinkEntry]) -> f64 {
    drinks
        .iter()
        .filter(|drink| {
            let keep = drink.is_countable();
            if !keep {
                tracing::debug!(?drink, "Skipping drink with non-positive fields");
            }
            keep
        })
        .map(|drink| {
            let volume_liters = drink.volume_ml * drink.count / 1000.0;
            let pure_alcohol_liters = volume_liters * (drink.abv_percent / 100.0);
            pure_alcohol_liters * ALCOHOL_DENSITY_G_PER_ML * 1000.0
        })
        .sum()
}

/// Classify a BAC percentage into a risk band
///
/// Upper bounds are inclusive: 0.029 is low, 0.079 is medium.
pub fn classify_risk_level(bac_percent: f64) -> RiskClassification {
    let level = if bac_percent <= 0.0 || bac_percent <= RISK_THRESHOLDS.low_upper {
        RiskLevel::Low
    } else if bac_percent <= RISK_THRESHOLDS.medium_upper {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };
    RiskClassification::from(level)
}

/// Estimate BAC for an input
///
/// Steps:
/// 1. Weight to kg, alcohol mass from the drink list
/// 2. Body water = kg × r (zero estimate if ≤ 0)
/// 3. Raw BAC = grams / (body water in mL) × 100
/// 4. Subtract default elimination over the elapsed hours
/// 5. Clamp at 0, round to 3 decimals, compare against the legal limit
pub fn estimate_bac(input: &EstimationInput) -> BacEstimate {
    let weight_kg = convert_weight(input.weight, input.weight_unit, WeightUnit::Kg);
    let alcohol_mass_grams = calculate_alcohol_mass_grams(&input.drinks);
    let body_water_liters = weight_kg * distribution_ratio(input.sex);

    if body_water_liters <= 0.0 {
        tracing::debug!(
            weight_kg,
            "Body water volume is not positive, returning zero estimate"
        );
        return BacEstimate {
            bac_percent: 0.0,
            country_code: input.country_code,
            legal_limit: None,
            over_legal_limit: None,
            risk: classify_risk_level(0.0),
        };
    }

    let raw_bac_percent = alcohol_mass_grams / (body_water_liters * 1000.0) * 100.0;
    let reduced = raw_bac_percent - ELIMINATION_RATE_DEFAULT * input.elapsed_hours.max(0.0);
    let bac_percent = round_to(reduced.max(0.0), 3);

    let legal_limit = general_limit(input.country_code);
    let over_legal_limit = legal_limit.map(|limit| bac_percent >= limit);

    tracing::debug!(
        alcohol_mass_grams,
        body_water_liters,
        raw_bac_percent,
        bac_percent,
        "Estimated BAC"
    );

    BacEstimate {
        bac_percent,
        country_code: input.country_code,
        legal_limit,
        over_legal_limit,
        risk: classify_risk_level(bac_percent),
    }
}

/// Hours to eliminate `excess_percent`, fastest rate first
fn elimination_hours_range(excess_percent: f64) -> HoursRange {
    let fastest = excess_percent / ELIMINATION_RATE_MAX;
    let slowest = excess_percent / ELIMINATION_RATE_MIN;
    (round_to(fastest.max(0.0), 1), round_to(slowest.max(0.0), 1))
}

/// Project how long until BAC reaches zero and the legal limit
///
/// The range is bounded by the min/max elimination rates. The limit range is
/// None when the limit is unknown or BAC is already at or below it.
pub fn estimate_time_to_zero(
    current_bac_percent: f64,
    legal_limit_percent: Option<f64>,
) -> TimeToZeroEstimate {
    let safe_bac = current_bac_percent.max(0.0);
    if safe_bac == 0.0 {
        return TimeToZeroEstimate {
            current_bac_percent: 0.0,
            to_zero_hours_range: Some((0.0, 0.0)),
            to_legal_limit_hours_range: legal_limit_percent.map(|_| (0.0, 0.0)),
        };
    }

    let to_legal_limit_hours_range = legal_limit_percent
        .filter(|&limit| safe_bac > limit)
        .map(|limit| elimination_hours_range(safe_bac - limit));

    TimeToZeroEstimate {
        current_bac_percent: safe_bac,
        to_zero_hours_range: Some(elimination_hours_range(safe_bac)),
        to_legal_limit_hours_range,
    }
}
