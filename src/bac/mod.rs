//! BAC estimation module
//!
//! Unit conversion, reference constants, the Widmark estimation engine, and
//! the validation/report/chart layers built on it.

pub mod calculation;
pub mod chart;
pub mod constants;
pub mod report;
pub mod units;
pub mod validation;

pub use calculation::{
    calculate_alcohol_mass_grams, classify_risk_level, distribution_ratio, estimate_bac,
    estimate_time_to_zero,
};
pub use chart::{default_chart, BacChart, ChartBand, ChartCell, ChartRow};
pub use constants::{general_limit, legal_limit, legal_limit_by_code, LEGAL_LIMITS};
pub use report::{BacReading, BacReport};
pub use units::{convert_bac, convert_weight, round_to, BacUnit, WeightUnit};
pub use validation::{elapsed_from_parts_checked, parse_bac_value, validate_input};
