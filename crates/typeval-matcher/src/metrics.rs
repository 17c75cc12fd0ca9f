//! Accuracy and mean reciprocal rank over a batch of predictions.

use typeval_core::entities::{GroundTruthEntity, Prediction, Signature};
use typeval_core::responses::MetricsResult;

use crate::compat::is_compatible;
use crate::entity::types_match;
use crate::evaluator::EvaluationOptions;
use crate::index::NameIndex;

/// 1-based rank of the first candidate that matches `ground_truth`,
/// looking at no more than `max_candidates` candidates.
///
/// Ranked predictions are judged on their return type alone; a single
/// guess must match parameters as well.
#[must_use]
pub fn first_match_rank(
    prediction: &Prediction,
    ground_truth: &Signature,
    max_candidates: Option<usize>,
) -> Option<usize> {
    let limit = max_candidates.unwrap_or(usize::MAX);
    prediction
        .candidates
        .iter()
        .take(limit)
        .position(|candidate| {
            if prediction.ranked {
                is_compatible(&candidate.return_type, &ground_truth.return_type)
            } else {
                types_match(candidate, ground_truth)
            }
        })
        .map(|index| index + 1)
}

/// Score `predictions` against `ground_truth` with default options.
///
/// Accuracy counts only rank-1 matches; MRR credits `1/rank` for the first
/// matching candidate. Every prediction counts toward the denominator, even
/// when its name is absent from ground truth.
#[must_use]
pub fn calculate_metrics(
    predictions: &[Prediction],
    ground_truth: &[GroundTruthEntity],
) -> MetricsResult {
    calculate_metrics_with(predictions, ground_truth, &EvaluationOptions::default())
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn calculate_metrics_with(
    predictions: &[Prediction],
    ground_truth: &[GroundTruthEntity],
    options: &EvaluationOptions,
) -> MetricsResult {
    let index = NameIndex::build(ground_truth, options.duplicate_policy);

    let mut correct = 0u64;
    let mut reciprocal_rank_sum = 0.0;

    for prediction in predictions {
        let Some(expected) = index.get(&prediction.name) else {
            continue;
        };
        if let Some(rank) = first_match_rank(prediction, &expected.types, options.max_candidates) {
            reciprocal_rank_sum += 1.0 / rank as f64;
            if rank == 1 {
                correct += 1;
            }
        }
    }

    MetricsResult::from_totals(predictions.len() as u64, correct, reciprocal_rank_sum)
}
