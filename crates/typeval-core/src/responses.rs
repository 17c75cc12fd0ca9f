//! Result types returned by the matcher and emitted as JSON by `tve` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{GroundTruthEntity, Prediction};
use crate::enums::ComparisonStatus;

/// Aggregate accuracy and mean reciprocal rank over one batch of predictions.
///
/// The denominator is always the number of predictions, matched or not.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MetricsResult {
    pub accuracy: f64,
    pub mrr: f64,
    pub total_predictions: u64,
    pub correct_predictions: u64,
    pub total_reciprocal_rank: f64,
}

impl MetricsResult {
    /// Derive the ratios from raw totals. Zero predictions yields zero ratios.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_totals(
        total_predictions: u64,
        correct_predictions: u64,
        total_reciprocal_rank: f64,
    ) -> Self {
        let (accuracy, mrr) = if total_predictions == 0 {
            (0.0, 0.0)
        } else {
            let total = total_predictions as f64;
            (
                correct_predictions as f64 / total,
                total_reciprocal_rank / total,
            )
        };
        Self {
            accuracy,
            mrr,
            total_predictions,
            correct_predictions,
            total_reciprocal_rank,
        }
    }

    /// Micro-average two results: counts and reciprocal ranks are summed,
    /// then the ratios are recomputed.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self::from_totals(
            self.total_predictions + other.total_predictions,
            self.correct_predictions + other.correct_predictions,
            self.total_reciprocal_rank + other.total_reciprocal_rank,
        )
    }
}

impl std::iter::Sum for MetricsResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}

/// Per-identifier outcome of a detailed comparison.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComparisonRecord {
    pub identifier: String,
    pub ground_truth: Option<GroundTruthEntity>,
    pub predicted: Option<Prediction>,
    pub status: ComparisonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response from `tve evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub metrics: MetricsResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<ComparisonRecord>>,
}

/// Metrics for one ground-truth/prediction file pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FileEvaluation {
    pub file: String,
    pub metrics: MetricsResult,
    pub missing: u64,
    pub extra: u64,
}

/// Response from `tve batch`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub files: Vec<FileEvaluation>,
    pub overall: MetricsResult,
}

/// Response from `tve check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    pub predicted: String,
    pub ground_truth: String,
    pub normalized_predicted: String,
    pub normalized_ground_truth: String,
    pub compatible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_predictions_never_divide() {
        let metrics = MetricsResult::from_totals(0, 0, 0.0);
        assert_eq!(metrics.accuracy, 0.0);
        assert_eq!(metrics.mrr, 0.0);
    }

    #[test]
    fn ratios_follow_totals() {
        let metrics = MetricsResult::from_totals(4, 1, 1.5);
        assert!((metrics.accuracy - 0.25).abs() < f64::EPSILON);
        assert!((metrics.mrr - 0.375).abs() < f64::EPSILON);
    }

    #[test]
    fn merge_is_micro_average() {
        let a = MetricsResult::from_totals(1, 1, 1.0);
        let b = MetricsResult::from_totals(3, 0, 0.5);
        let merged = a.merge(b);
        assert_eq!(merged.total_predictions, 4);
        assert_eq!(merged.correct_predictions, 1);
        assert!((merged.accuracy - 0.25).abs() < f64::EPSILON);
        assert!((merged.mrr - 0.375).abs() < f64::EPSILON);
    }

    #[test]
    fn sum_of_nothing_is_empty_result() {
        let total: MetricsResult = Vec::<MetricsResult>::new().into_iter().sum();
        assert_eq!(total, MetricsResult::default());
    }
}
