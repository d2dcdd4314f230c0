//! Preparation readiness scoring for exam practice.
//!
//! This crate holds the pure scoring core: the answer/result data model, the
//! readiness engine, the metric descriptions shown next to each sub-score and
//! the coarse readiness level. Nothing here performs I/O.

pub mod engine;
pub mod explainer;
pub mod level;
pub mod model;

pub use engine::{compute_readiness, compute_readiness_now};
pub use explainer::{Metric, MetricExplanation, explain, explain_all};
pub use level::ReadinessLevel;
pub use model::{AnswerEvent, FALLBACK_BANK_SIZE, ReadinessResult, ScoreInput};
