//! Evaluation entry point carrying explicit options.

use typeval_core::entities::{GroundTruthEntity, Prediction};
use typeval_core::enums::{ComparisonStatus, DuplicatePolicy};
use typeval_core::responses::{ComparisonRecord, MetricsResult};

use crate::index::NameIndex;
use crate::metrics::calculate_metrics_with;
use crate::report::generate_detailed_comparison_with;

/// Knobs for one evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Score only the top-k candidates of a ranked prediction. `None` scores all.
    pub max_candidates: Option<usize>,
    /// Which entry wins when a name repeats within one input set.
    pub duplicate_policy: DuplicatePolicy,
}

/// Everything one evaluation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub metrics: MetricsResult,
    pub comparisons: Vec<ComparisonRecord>,
    /// Ground-truth names that occurred more than once.
    pub duplicate_ground_truth: Vec<String>,
}

impl Evaluation {
    /// Number of comparison records with `status`.
    #[must_use]
    pub fn count(&self, status: ComparisonStatus) -> usize {
        self.comparisons
            .iter()
            .filter(|record| record.status == status)
            .count()
    }
}

/// Scores predictions against ground truth under fixed options.
///
/// Holds no state between runs; independent runs may share one evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    options: EvaluationOptions,
}

impl Evaluator {
    #[must_use]
    pub const fn new(options: EvaluationOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    #[must_use]
    pub fn metrics(
        &self,
        predictions: &[Prediction],
        ground_truth: &[GroundTruthEntity],
    ) -> MetricsResult {
        calculate_metrics_with(predictions, ground_truth, &self.options)
    }

    #[must_use]
    pub fn compare(
        &self,
        predictions: &[Prediction],
        ground_truth: &[GroundTruthEntity],
    ) -> Vec<ComparisonRecord> {
        generate_detailed_comparison_with(predictions, ground_truth, &self.options)
    }

    /// Metrics and detailed comparison in one pass over the inputs.
    #[must_use]
    pub fn evaluate(
        &self,
        predictions: &[Prediction],
        ground_truth: &[GroundTruthEntity],
    ) -> Evaluation {
        let duplicate_ground_truth = NameIndex::build(ground_truth, self.options.duplicate_policy)
            .duplicates()
            .iter()
            .map(ToString::to_string)
            .collect();

        Evaluation {
            metrics: self.metrics(predictions, ground_truth),
            comparisons: self.compare(predictions, ground_truth),
            duplicate_ground_truth,
        }
    }
}
