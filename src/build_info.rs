//! Build information module
//!
//! Package metadata and the model parameters compiled into this build.

use serde::Serialize;

use crate::bac::constants::{
    ALCOHOL_DENSITY_G_PER_ML, DISTRIBUTION_RATIO_FEMALE, DISTRIBUTION_RATIO_MALE,
    ELIMINATION_RATE_DEFAULT, ELIMINATION_RATE_MAX, ELIMINATION_RATE_MIN, RISK_THRESHOLDS,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Widmark parameters the estimates are computed with
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelParameters {
    pub alcohol_density_g_per_ml: f64,
    pub distribution_ratio_male: f64,
    pub distribution_ratio_female: f64,
    /// (min, default, max) in % BAC per hour
    pub elimination_rates: (f64, f64, f64),
    /// Inclusive upper bounds of the low and medium risk bands
    pub risk_upper_bounds: (f64, f64),
}

impl ModelParameters {
    pub fn current() -> Self {
        Self {
            alcohol_density_g_per_ml: ALCOHOL_DENSITY_G_PER_ML,
            distribution_ratio_male: DISTRIBUTION_RATIO_MALE,
            distribution_ratio_female: DISTRIBUTION_RATIO_FEMALE,
            elimination_rates: (
                ELIMINATION_RATE_MIN,
                ELIMINATION_RATE_DEFAULT,
                ELIMINATION_RATE_MAX,
            ),
            risk_upper_bounds: (RISK_THRESHOLDS.low_upper, RISK_THRESHOLDS.medium_upper),
        }
    }
}

/// Output of `safebac version`
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub model: ModelParameters,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            description: DESCRIPTION,
            model: ModelParameters::current(),
        }
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    let (min, default, max) = info.model.elimination_rates;
    eprintln!("===============================================");
    eprintln!("  SafeBAC estimator v{}", info.version);
    eprintln!(
        "  Widmark r: {} male / {} female",
        info.model.distribution_ratio_male, info.model.distribution_ratio_female
    );
    eprintln!("  Elimination: {}-{} %/h (default {})", min, max, default);
    eprintln!("  Estimates only. Never use to decide whether to drive.");
    eprintln!("===============================================");
}
