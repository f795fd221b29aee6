//! Risk tiers for aggregate scores.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::policy::RiskThresholds;

/// Coarse three-tier bucketing of an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Get numeric value for comparison.
    fn value(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// Bucket `score` using `thresholds`.
    pub fn from_score(score: u8, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.high_min {
            Self::High
        } else if score >= thresholds.medium_min {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket `score` with the standard thresholds: 70 and above is high,
/// 40 to 69 medium, anything lower low.
pub fn classify_risk(score: u8) -> RiskLevel {
    RiskLevel::from_score(score, &RiskThresholds::default())
}
