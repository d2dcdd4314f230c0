use serde::{Deserialize, Serialize};

/// Score at or above which a candidate is considered ready
pub const HIGH_THRESHOLD: u8 = 85;

/// Score at or above which a candidate is considered on track
pub const MEDIUM_THRESHOLD: u8 = 50;

/// Coarse readiness bucket shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Low,
    Medium,
    High,
}

impl ReadinessLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Needs work",
            Self::Medium => "On track",
            Self::High => "Ready",
        }
    }
}
