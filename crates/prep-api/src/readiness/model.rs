use prep_score::{ReadinessLevel, ReadinessResult};
use serde::Serialize;

/// Readiness of one user on one quiz: the full result plus its level
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    #[serde(flatten)]
    pub result: ReadinessResult,
    pub level: ReadinessLevel,
    pub label: &'static str,
}

impl From<ReadinessResult> for ReadinessReport {
    fn from(result: ReadinessResult) -> Self {
        let level = ReadinessLevel::from_score(result.score);
        Self {
            result,
            level,
            label: level.label(),
        }
    }
}
