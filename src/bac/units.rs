//! Unit types and conversion functions
//!
//! Body-weight units (kg, lb) and BAC concentration units (%, ‰, mg/dL).

use serde::{Deserialize, Serialize};

/// Body weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Lb),
            _ => None,
        }
    }

    /// The other unit of the pair, used when swapping the weight field
    pub fn swapped(&self) -> Self {
        match self {
            WeightUnit::Kg => WeightUnit::Lb,
            WeightUnit::Lb => WeightUnit::Kg,
        }
    }
}

/// Blood alcohol concentration unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacUnit {
    /// Grams per 100 mL, the US/UK convention (0.08)
    Percent,
    /// Grams per liter, common in Europe (0.8)
    Permille,
    /// Milligrams per deciliter (80)
    MgPerDl,
}

impl BacUnit {
    pub const ALL: [BacUnit; 3] = [BacUnit::Percent, BacUnit::Permille, BacUnit::MgPerDl];

    pub fn as_str(&self) -> &'static str {
        match self {
            BacUnit::Percent => "percent",
            BacUnit::Permille => "permille",
            BacUnit::MgPerDl => "mg_per_dl",
        }
    }

    /// Parse from string, accepting symbols and common spellings
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "%" | "percent" | "pct" | "bac" => Some(BacUnit::Percent),
            "‰" | "permille" | "per_mille" | "promille" | "g/l" => Some(BacUnit::Permille),
            "mg/dl" | "mgdl" | "mg_dl" | "mgperdl" | "mg_per_dl" => Some(BacUnit::MgPerDl),
            _ => None,
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            BacUnit::Percent => "%",
            BacUnit::Permille => "‰",
            BacUnit::MgPerDl => "mg/dL",
        }
    }

    /// Decimal places used when rendering a value in this unit
    pub fn display_precision(&self) -> u32 {
        match self {
            BacUnit::Percent | BacUnit::Permille => 3,
            BacUnit::MgPerDl => 1,
        }
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.2046226218;
/// Permille per percent
pub const PERMILLE_PER_PERCENT: f64 = 10.0;
/// mg/dL per percent (0.08% ≈ 80 mg/dL); an approximation that ignores blood density
pub const MG_PER_DL_PER_PERCENT: f64 = 1000.0;

// ============================================================================
// Conversions
// ============================================================================

/// Convert a body weight between units
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kg, WeightUnit::Lb) => value * LB_PER_KG,
        (WeightUnit::Lb, WeightUnit::Kg) => value / LB_PER_KG,
        _ => value,
    }
}

/// Convert a BAC value between units, pivoting through percent
///
/// No rounding is applied; use [`round_to`] with [`BacUnit::display_precision`]
/// when rendering.
pub fn convert_bac(value: f64, from: BacUnit, to: BacUnit) -> f64 {
    if from == to {
        return value;
    }

    let percent = match from {
        BacUnit::Percent => value,
        BacUnit::Permille => value / PERMILLE_PER_PERCENT,
        BacUnit::MgPerDl => value / MG_PER_DL_PER_PERCENT,
    };

    match to {
        BacUnit::Percent => percent,
        BacUnit::Permille => percent * PERMILLE_PER_PERCENT,
        BacUnit::MgPerDl => percent * MG_PER_DL_PER_PERCENT,
    }
}

/// Extra digits inspected past the rounding position to detect exact ties
const TIE_DIGITS: usize = 24;

/// Round to a fixed number of decimal places
///
/// Rounds the exact binary value, not `value * 10^n`: 2.55 is stored as
/// 2.54999… and rounds to 2.5. Exact ties (0.25) round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let places = decimals as usize;
    let magnitude = value.abs();

    // `{:.N}` resolves exact ties to even, so ties are detected separately
    let expanded = format!("{:.*}", places + TIE_DIGITS, magnitude);
    let (head, tail) = expanded.split_at(expanded.len() - TIE_DIGITS);
    let is_tie = tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0');

    let rounded = if is_tie {
        let truncated: f64 = head.trim_end_matches('.').parse().unwrap_or(magnitude);
        let step = 10f64.powi(-(decimals as i32));
        format!("{:.*}", places, truncated + step).parse().unwrap_or(magnitude)
    } else {
        format!("{:.*}", places, magnitude).parse().unwrap_or(magnitude)
    };

    rounded.copysign(value)
}
