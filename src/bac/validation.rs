//! Input validation
//!
//! Checks a caller runs before estimating. The engine accepts anything and
//! returns zeroed results for degenerate input; this layer turns those cases
//! into explicit errors.

use crate::error::ValidationError;
use crate::models::{elapsed_from_parts, EstimationInput};

/// Validate an estimation input
///
/// Checks run in form order: weight, time, drinks.
pub fn validate_input(input: &EstimationInput) -> Result<(), ValidationError> {
    if !input.weight.is_finite() || input.weight <= 0.0 {
        return Err(ValidationError::WeightRequired);
    }
    validate_elapsed(input.elapsed_hours)?;
    if !input.drinks.iter().any(|d| d.is_valid()) {
        return Err(ValidationError::DrinksRequired);
    }
    Ok(())
}

fn validate_elapsed(elapsed_hours: f64) -> Result<(), ValidationError> {
    if !elapsed_hours.is_finite() || elapsed_hours < 0.0 {
        return Err(ValidationError::TimeInvalid);
    }
    if elapsed_hours == 0.0 {
        return Err(ValidationError::TimeRequired);
    }
    Ok(())
}

/// Combine separate hour and minute fields, rejecting negative parts
pub fn elapsed_from_parts_checked(hours: f64, minutes: f64) -> Result<f64, ValidationError> {
    if hours < 0.0 || minutes < 0.0 {
        return Err(ValidationError::TimeInvalid);
    }
    let elapsed = elapsed_from_parts(hours, minutes);
    validate_elapsed(elapsed)?;
    Ok(elapsed)
}

/// Parse a measured BAC reading, accepting a comma decimal separator
pub fn parse_bac_value(s: &str) -> Result<f64, ValidationError> {
    let normalized = s.trim().replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::ValueInvalid(s.trim().to_string())),
    }
}
