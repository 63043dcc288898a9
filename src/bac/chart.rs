//! Reference BAC chart
//!
//! Approximate peak BAC (%) by body weight and number of drinks, as published
//! on the chart page. The female table is the male table scaled by 0.68 / 0.55.

use serde::Serialize;

use super::units::{convert_weight, WeightUnit};
use crate::models::Sex;

/// Number of drink columns in the chart
pub const CHART_DRINKS: usize = 8;

type ChartTable = [(f64, [f64; CHART_DRINKS]); 8];

/// Weight (lb) and peak BAC for 1..=8 drinks, male (r = 0.68)
const MALE_TABLE: ChartTable = [
    (100.0, [0.038, 0.075, 0.113, 0.150, 0.188, 0.225, 0.263, 0.300]),
    (120.0, [0.031, 0.063, 0.094, 0.125, 0.156, 0.188, 0.219, 0.250]),
    (140.0, [0.027, 0.054, 0.080, 0.107, 0.134, 0.161, 0.188, 0.214]),
    (160.0, [0.023, 0.047, 0.070, 0.094, 0.117, 0.141, 0.164, 0.188]),
    (180.0, [0.021, 0.042, 0.063, 0.083, 0.104, 0.125, 0.146, 0.167]),
    (200.0, [0.019, 0.038, 0.056, 0.075, 0.094, 0.113, 0.131, 0.150]),
    (220.0, [0.017, 0.034, 0.051, 0.068, 0.085, 0.102, 0.119, 0.136]),
    (240.0, [0.016, 0.031, 0.047, 0.063, 0.078, 0.094, 0.109, 0.125]),
];

/// Weight (lb) and peak BAC for 1..=8 drinks, female (r = 0.55)
const FEMALE_TABLE: ChartTable = [
    (100.0, [0.047, 0.093, 0.140, 0.186, 0.233, 0.279, 0.326, 0.372]),
    (120.0, [0.039, 0.078, 0.116, 0.155, 0.194, 0.233, 0.271, 0.310]),
    (140.0, [0.033, 0.066, 0.100, 0.133, 0.166, 0.199, 0.233, 0.266]),
    (160.0, [0.029, 0.058, 0.087, 0.116, 0.145, 0.174, 0.203, 0.232]),
    (180.0, [0.026, 0.052, 0.078, 0.103, 0.129, 0.155, 0.181, 0.207]),
    (200.0, [0.023, 0.047, 0.070, 0.093, 0.116, 0.140, 0.163, 0.186]),
    (220.0, [0.021, 0.042, 0.064, 0.085, 0.106, 0.127, 0.148, 0.169]),
    (240.0, [0.019, 0.039, 0.058, 0.078, 0.097, 0.116, 0.136, 0.155]),
];

/// Colour band of a chart cell (exclusive upper bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartBand {
    /// Below 0.02
    Minimal,
    /// Below 0.05
    Light,
    /// Below 0.08
    Elevated,
    /// Below 0.15
    Impaired,
    Severe,
}

impl ChartBand {
    pub const ALL: [ChartBand; 5] = [
        ChartBand::Minimal,
        ChartBand::Light,
        ChartBand::Elevated,
        ChartBand::Impaired,
        ChartBand::Severe,
    ];

    pub fn classify(bac_percent: f64) -> Self {
        if bac_percent < 0.02 {
            ChartBand::Minimal
        } else if bac_percent < 0.05 {
            ChartBand::Light
        } else if bac_percent < 0.08 {
            ChartBand::Elevated
        } else if bac_percent < 0.15 {
            ChartBand::Impaired
        } else {
            ChartBand::Severe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartBand::Minimal => "minimal",
            ChartBand::Light => "light",
            ChartBand::Elevated => "elevated",
            ChartBand::Impaired => "impaired",
            ChartBand::Severe => "severe",
        }
    }

    /// Range label for the chart legend
    pub fn range_label(&self) -> &'static str {
        match self {
            ChartBand::Minimal => "< 0.02%",
            ChartBand::Light => "0.02-0.05%",
            ChartBand::Elevated => "0.05-0.08%",
            ChartBand::Impaired => "0.08-0.15%",
            ChartBand::Severe => ">= 0.15%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartCell {
    pub drinks: u32,
    pub bac_percent: f64,
    pub band: ChartBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub weight_lb: f64,
    /// Rounded to whole kilograms
    pub weight_kg: f64,
    pub cells: Vec<ChartCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacChart {
    pub sex: Sex,
    pub rows: Vec<ChartRow>,
}

/// Reference chart for one sex: 100-240 lb, 1-8 drinks
pub fn default_chart(sex: Sex) -> BacChart {
    let table = match sex {
        Sex::Male => &MALE_TABLE,
        Sex::Female => &FEMALE_TABLE,
    };

    let rows = table
        .iter()
        .map(|(weight_lb, values)| ChartRow {
            weight_lb: *weight_lb,
            weight_kg: convert_weight(*weight_lb, WeightUnit::Lb, WeightUnit::Kg).round(),
            cells: values
                .iter()
                .zip(1u32..)
                .map(|(&bac_percent, drinks)| ChartCell {
                    drinks,
                    bac_percent,
                    band: ChartBand::classify(bac_percent),
                })
                .collect(),
        })
        .collect();

    BacChart { sex, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ChartBand::classify(0.0), ChartBand::Minimal);
        assert_eq!(ChartBand::classify(0.019), ChartBand::Minimal);
        assert_eq!(ChartBand::classify(0.02), ChartBand::Light);
        assert_eq!(ChartBand::classify(0.05), ChartBand::Elevated);
        assert_eq!(ChartBand::classify(0.08), ChartBand::Impaired);
        assert_eq!(ChartBand::classify(0.15), ChartBand::Severe);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(ChartBand::Impaired.as_str(), "impaired");
        assert_eq!(ChartBand::Severe.range_label(), ">= 0.15%");
        let json = serde_json::to_string(&ChartBand::Elevated).unwrap();
        assert_eq!(json, format!("\"{}\"", ChartBand::Elevated.as_str()));
    }

    #[test]
    fn test_default_chart_shape() {
        let chart = default_chart(Sex::Male);
        assert_eq!(chart.rows.len(), 8);
        assert!(chart.rows.iter().all(|r| r.cells.len() == CHART_DRINKS));
        assert_eq!(chart.rows[0].weight_lb, 100.0);
        assert_eq!(chart.rows[0].weight_kg, 45.0);
        assert_eq!(chart.rows[7].weight_kg, 109.0);
        assert_eq!(chart.rows[0].cells[0].drinks, 1);
        assert_eq!(chart.rows[0].cells[7].drinks, 8);
    }

    #[test]
    fn test_reference_cells() {
        let male = default_chart(Sex::Male);
        assert_eq!(male.rows[0].cells[0].bac_percent, 0.038);
        assert_eq!(male.rows[3].cells[3].bac_percent, 0.094);
        assert_eq!(male.rows[7].cells[7].bac_percent, 0.125);

        let female = default_chart(Sex::Female);
        assert_eq!(female.rows[0].cells[0].bac_percent, 0.047);
        assert_eq!(female.rows[3].cells[3].bac_percent, 0.116);
        assert_eq!(female.rows[0].cells[7].bac_percent, 0.372);
    }

    #[test]
    fn test_reference_cell_bands() {
        let male = default_chart(Sex::Male);
        // 140 lb, 3 drinks sits exactly on 0.080
        assert_eq!(male.rows[2].cells[2].band, ChartBand::Impaired);
        assert_eq!(male.rows[7].cells[0].band, ChartBand::Minimal);
        assert_eq!(male.rows[0].cells[4].band, ChartBand::Severe);
    }

    #[test]
    fn test_chart_monotonic() {
        for sex in [Sex::Male, Sex::Female] {
            let chart = default_chart(sex);
            for row in &chart.rows {
                for pair in row.cells.windows(2) {
                    assert!(pair[0].bac_percent <= pair[1].bac_percent);
                }
            }
            for pair in chart.rows.windows(2) {
                assert!(pair[0].cells[0].bac_percent >= pair[1].cells[0].bac_percent);
            }
        }
    }

    #[test]
    fn test_female_chart_is_higher() {
        let male = default_chart(Sex::Male);
        let female = default_chart(Sex::Female);
        for (m, f) in male.rows.iter().zip(&female.rows) {
            assert!(f.cells[3].bac_percent > m.cells[3].bac_percent);
        }
    }
}
