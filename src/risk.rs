//! Risk band classification
//!
//! Fixed four-way thresholding of the fraud probability. Thresholds are
//! constants, not a configuration point.

use serde::{Deserialize, Serialize};

const MODERATE_FLOOR: f64 = 0.2;
const HIGH_FLOOR: f64 = 0.6;
const VERY_HIGH_FLOOR: f64 = 0.85;

/// Ordinal risk category derived from the predicted probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskBand {
    /// Bucket a probability. Bands are half-open on the right except
    /// the top one, which includes 1.0.
    pub fn from_probability(p: f64) -> Self {
        if p < MODERATE_FLOOR {
            RiskBand::Low
        } else if p < HIGH_FLOOR {
            RiskBand::Moderate
        } else if p < VERY_HIGH_FLOOR {
            RiskBand::High
        } else {
            RiskBand::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
            RiskBand::VeryHigh => "Very High Risk",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskBand::Low => "This transaction appears safe.",
            RiskBand::Moderate => "Some unusual activity detected. Review advised.",
            RiskBand::High => "Potential fraud indicators found.",
            RiskBand::VeryHigh => "This transaction is highly likely to be fraudulent.",
        }
    }

    /// Panel accent color for the dashboard
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::Low => "#00e676",
            RiskBand::Moderate => "#ffeb3b",
            RiskBand::High => "#ffa726",
            RiskBand::VeryHigh => "#ff5252",
        }
    }
}

/// Progress indicator value, defensively clamped to 1.0
pub fn progress(p: f64) -> f64 {
    p.min(1.0)
}
