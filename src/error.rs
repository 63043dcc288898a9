//! Error types
//!
//! The estimation engine never fails; these cover input checking, parsing,
//! and the command-line surface.

use thiserror::Error;

/// Input validation errors, mirroring the calculator form checks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Weight is required and must be greater than zero")]
    WeightRequired,

    #[error("Time since first drink cannot be negative")]
    TimeInvalid,

    #[error("Time since first drink is required")]
    TimeRequired,

    #[error("Add at least one drink with a positive count, volume, and ABV")]
    DrinksRequired,

    #[error("Invalid BAC value: {0}")]
    ValueInvalid(String),
}

impl ValidationError {
    /// Translation key for the presentation layer
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::WeightRequired => "errors.weightRequired",
            ValidationError::TimeInvalid => "errors.timeInvalid",
            ValidationError::TimeRequired => "errors.timeRequired",
            ValidationError::DrinksRequired => "errors.drinksRequired",
            ValidationError::ValueInvalid(_) => "errors.valueInvalid",
        }
    }
}

/// Errors from the outer surfaces (CLI, JSON input)
#[derive(Debug, Error)]
pub enum BacError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Usage: {0}")]
    Usage(String),
}

/// Result type for fallible operations outside the engine
pub type BacResult<T> = Result<T, BacError>;
