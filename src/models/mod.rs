//! Data models
//!
//! Plain value types consumed and produced by the estimation engine.

mod country;
mod drink;
mod estimate;
mod input;

pub use country::{CountryCode, LegalLimit, LimitCategory};
pub use drink::{DrinkEntry, DrinkType};
pub use estimate::{BacEstimate, HoursRange, RiskClassification, RiskLevel, TimeToZeroEstimate};
pub use input::{elapsed_from_parts, EstimationInput, Sex};
