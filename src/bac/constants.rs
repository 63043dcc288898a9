//! Estimation constants and legal limit reference table
//!
//! The engine reads every model parameter from here.

use crate::models::{CountryCode, LegalLimit};

/// Grams of pure ethanol per milliliter
pub const ALCOHOL_DENSITY_G_PER_ML: f64 = 0.789;

// ============================================================================
// Widmark Distribution Ratios (r)
// ============================================================================

/// Fraction of body mass alcohol distributes into, male
pub const DISTRIBUTION_RATIO_MALE: f64 = 0.68;
/// Fraction of body mass alcohol distributes into, female
pub const DISTRIBUTION_RATIO_FEMALE: f64 = 0.55;

// ============================================================================
// Elimination Rates (% BAC per hour)
// ============================================================================

/// Slowest clearance; gives the upper end of time ranges
pub const ELIMINATION_RATE_MIN: f64 = 0.01;
/// Fastest clearance; gives the lower end of time ranges
pub const ELIMINATION_RATE_MAX: f64 = 0.02;
/// Used for point estimates
pub const ELIMINATION_RATE_DEFAULT: f64 = 0.015;

// ============================================================================
// Risk Thresholds (% BAC, inclusive upper bounds)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub low_upper: f64,
    pub medium_upper: f64,
}

pub const RISK_THRESHOLDS: RiskThresholds = RiskThresholds {
    low_upper: 0.029,
    medium_upper: 0.079,
};

// ============================================================================
// Legal Limits
// ============================================================================

pub static LEGAL_LIMITS: [LegalLimit; 7] = [
    LegalLimit {
        country_code: CountryCode::Us,
        general: Some(0.08),
        novice: None,
        professional: Some(0.04),
        notes: "Many U.S. states use 0.08% as the per se limit for most drivers and lower limits for commercial and underage drivers.",
    },
    LegalLimit {
        country_code: CountryCode::Uk,
        general: Some(0.08),
        novice: None,
        professional: None,
        notes: "England and Wales typically use 0.08%. Scotland and some other jurisdictions may use lower limits.",
    },
    LegalLimit {
        country_code: CountryCode::Au,
        general: Some(0.05),
        novice: None,
        professional: None,
        notes: "Many Australian states use 0.05% for most drivers, with stricter limits for learner, provisional, and professional drivers.",
    },
    LegalLimit {
        country_code: CountryCode::Ca,
        general: Some(0.08),
        novice: None,
        professional: None,
        notes: "Canadian federal impaired driving offences often reference 0.08%, while provinces may apply additional administrative limits.",
    },
    LegalLimit {
        country_code: CountryCode::Nz,
        general: Some(0.05),
        novice: None,
        professional: None,
        notes: "New Zealand commonly uses 0.05% for adult drivers, with lower limits or zero tolerance for younger drivers.",
    },
    LegalLimit {
        country_code: CountryCode::Ma,
        general: Some(0.02),
        novice: None,
        professional: None,
        notes: "Some sources describe Morocco as having very low or near-zero tolerated BAC limits. Always confirm with current local law.",
    },
    LegalLimit {
        country_code: CountryCode::Dz,
        general: Some(0.0),
        novice: None,
        professional: None,
        notes: "Some sources describe Algeria as effectively having a zero-tolerance policy for driving after drinking. Always confirm with current local law.",
    },
];

/// Look up the legal limit record for a country
pub fn legal_limit(country: CountryCode) -> Option<&'static LegalLimit> {
    LEGAL_LIMITS.iter().find(|l| l.country_code == country)
}

/// Look up by two-letter code; unknown codes yield None
pub fn legal_limit_by_code(code: &str) -> Option<&'static LegalLimit> {
    CountryCode::from_str(code).and_then(legal_limit)
}

/// General limit in percent, None if the country or its limit is unknown
pub fn general_limit(country: CountryCode) -> Option<f64> {
    legal_limit(country).and_then(|l| l.general)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_has_a_limit() {
        for code in CountryCode::ALL {
            assert!(legal_limit(code).is_some(), "missing {}", code.as_str());
        }
        assert_eq!(LEGAL_LIMITS.len(), CountryCode::ALL.len());
    }

    #[test]
    fn test_general_limits() {
        assert_eq!(general_limit(CountryCode::Us), Some(0.08));
        assert_eq!(general_limit(CountryCode::Au), Some(0.05));
        assert_eq!(general_limit(CountryCode::Ma), Some(0.02));
        assert_eq!(general_limit(CountryCode::Dz), Some(0.0));
    }

    #[test]
    fn test_us_professional_limit() {
        let us = legal_limit(CountryCode::Us).unwrap();
        assert_eq!(us.professional, Some(0.04));
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert!(legal_limit_by_code("FR").is_none());
        assert!(legal_limit_by_code("").is_none());
        assert_eq!(legal_limit_by_code("nz").and_then(|l| l.general), Some(0.05));
    }

    #[test]
    fn test_thresholds_ordered() {
        assert!(RISK_THRESHOLDS.low_upper < RISK_THRESHOLDS.medium_upper);
        assert!(ELIMINATION_RATE_MIN < ELIMINATION_RATE_DEFAULT);
        assert!(ELIMINATION_RATE_DEFAULT < ELIMINATION_RATE_MAX);
    }
}
