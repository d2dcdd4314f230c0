//! Human-readable descriptions of the readiness sub-metrics.
//!
//! [`Metric::ALL`] is the canonical list of what [`crate::engine`] produces;
//! keep the two in sync.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A readiness sub-metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Volume,
    Accuracy,
    Recency,
    Coverage,
    Reliability,
}

impl Metric {
    pub const ALL: [Self; 5] = [
        Self::Volume,
        Self::Accuracy,
        Self::Recency,
        Self::Coverage,
        Self::Reliability,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Accuracy => "accuracy",
            Self::Recency => "recency",
            Self::Coverage => "coverage",
            Self::Reliability => "reliability",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown metric: '{0}'")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Display data for one sub-metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricExplanation {
    pub metric: Metric,
    pub label: &'static str,
    /// Share of the composite, or `×` for the reliability multiplier
    pub weight: &'static str,
    /// What the metric measures
    pub description: &'static str,
    /// How the metric moves the score
    pub insight: &'static str,
    /// What to practice to raise it
    pub pro_tip: &'static str,
}

pub const fn explain(metric: Metric) -> MetricExplanation {
    let (label, weight, description, insight, pro_tip) = match metric {
        Metric::Volume => (
            "Volume",
            "45%",
            "Distinct questions you have answered correctly at least once. Early correct \
             answers count the most; repeating the same question does not add volume.",
            "The more different questions you master, the more evidence the score rests \
             on. Gains flatten as you approach the size of the question bank.",
            "Keep going past the first hundred questions. The estimate gets solid once a \
             few hundred distinct questions have been answered correctly.",
        ),
        Metric::Accuracy => (
            "Accuracy",
            "30%",
            "Share of correct answers, weighted toward your recent practice. Answers lose \
             weight over time, so your current level matters more than old mistakes.",
            "The quality half of the score. It looks at how often you get questions right, \
             not only how many you attempt.",
            "Read each question carefully instead of rushing. Steady accuracy above 85% is \
             the target for the hardest exams.",
        ),
        Metric::Recency => (
            "Recency",
            "15%",
            "How recently you practiced. Drops linearly to zero after 30 days without \
             any answer.",
            "Preparation fades when you stop. The score drops gradually to reflect it \
             after your last session.",
            "Fifteen minutes every day beats four hours once a week. Regular practice \
             keeps this metric at 100%.",
        ),
        Metric::Coverage => (
            "Coverage",
            "10%",
            "Breadth of practice: half measured against the whole question bank, half \
             against your own answers, so grinding the same subset lowers it.",
            "Rewards variety across subjects and chapters. Repeating questions you already \
             know inflates accuracy but lowers coverage.",
            "Favor questions you have never seen in custom simulations to raise this \
             metric quickly.",
        ),
        Metric::Reliability => (
            "Reliability",
            "×",
            "Confidence in the score. It stays at zero until you have answered more than \
             50 distinct questions and reaches full strength at 300.",
            "Multiplies the whole score. A few lucky answers cannot produce a high score \
             until enough distinct questions back it up.",
            "Spread your practice over many distinct questions rather than retrying the \
             same short quiz.",
        ),
    };

    MetricExplanation {
        metric,
        label,
        weight,
        description,
        insight,
        pro_tip,
    }
}

/// Explanations for every sub-metric, in [`Metric::ALL`] order.
pub fn explain_all() -> [MetricExplanation; 5] {
    Metric::ALL.map(explain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_metric_is_explained() {
        let all = explain_all();
        assert_eq!(all.len(), Metric::ALL.len());
        for (explanation, metric) in all.iter().zip(Metric::ALL) {
            assert_eq!(explanation.metric, metric);
            assert!(!explanation.label.is_empty());
            assert!(!explanation.description.is_empty());
            assert!(!explanation.insight.is_empty());
            assert!(!explanation.pro_tip.is_empty());
        }
    }

    #[test]
    fn test_weights_match_engine() {
        use crate::engine::{ACCURACY_WEIGHT, COVERAGE_WEIGHT, RECENCY_WEIGHT, VOLUME_WEIGHT};

        let percent = |w: f64| format!("{}%", (w * 100.0).round() as u32);
        assert_eq!(explain(Metric::Volume).weight, percent(VOLUME_WEIGHT));
        assert_eq!(explain(Metric::Accuracy).weight, percent(ACCURACY_WEIGHT));
        assert_eq!(explain(Metric::Recency).weight, percent(RECENCY_WEIGHT));
        assert_eq!(explain(Metric::Coverage).weight, percent(COVERAGE_WEIGHT));
    }

    #[test]
    fn test_metric_from_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>(), Ok(metric));
        }
        assert_eq!(
            "speed".parse::<Metric>(),
            Err(UnknownMetric("speed".to_string()))
        );
        assert!("Volume".parse::<Metric>().is_err());
    }

    #[test]
    fn test_explanation_serializes_camel_case() {
        let json = serde_json::to_value(explain(Metric::Coverage)).unwrap();
        assert_eq!(json["metric"], "coverage");
        assert_eq!(json["weight"], "10%");
        assert!(json["insight"].is_string());
        assert!(json["proTip"].is_string());
        assert!(json.get("pro_tip").is_none());
    }

    #[test]
    fn test_metric_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Metric::Reliability).unwrap(),
            r#""reliability""#
        );
    }
}
