//! Per-identifier correct/incorrect/missing/extra classification.

use typeval_core::entities::{GroundTruthEntity, Prediction};
use typeval_core::enums::ComparisonStatus;
use typeval_core::responses::ComparisonRecord;

use crate::entity::signature_mismatches;
use crate::evaluator::EvaluationOptions;
use crate::index::NameIndex;

/// Classify every identifier with default options, sorted by identifier.
#[must_use]
pub fn generate_detailed_comparison(
    predictions: &[Prediction],
    ground_truth: &[GroundTruthEntity],
) -> Vec<ComparisonRecord> {
    generate_detailed_comparison_with(predictions, ground_truth, &EvaluationOptions::default())
}

pub(crate) fn generate_detailed_comparison_with(
    predictions: &[Prediction],
    ground_truth: &[GroundTruthEntity],
    options: &EvaluationOptions,
) -> Vec<ComparisonRecord> {
    let truth_index = NameIndex::build(ground_truth, options.duplicate_policy);
    let prediction_index = NameIndex::build(predictions, options.duplicate_policy);

    let mut records: Vec<ComparisonRecord> = prediction_index
        .iter()
        .map(|(name, predicted)| match truth_index.get(name) {
            Some(expected) => compare_entity(name, predicted, expected),
            None => ComparisonRecord {
                identifier: name.to_string(),
                ground_truth: None,
                predicted: Some(predicted.clone()),
                status: ComparisonStatus::Extra,
                details: None,
            },
        })
        .collect();

    records.extend(
        truth_index
            .iter()
            .filter(|(name, _)| !prediction_index.contains(name))
            .map(|(name, expected)| ComparisonRecord {
                identifier: name.to_string(),
                ground_truth: Some(expected.clone()),
                predicted: None,
                status: ComparisonStatus::Missing,
                details: None,
            }),
    );

    records.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    records
}

/// Judge the top-ranked candidate; that is the one top-1 accuracy counts.
fn compare_entity(
    name: &str,
    predicted: &Prediction,
    expected: &GroundTruthEntity,
) -> ComparisonRecord {
    let (status, details) = match predicted.top() {
        None => (ComparisonStatus::Incorrect, Some(String::from("no candidates"))),
        Some(top) => {
            let mismatches = signature_mismatches(top, &expected.types);
            if mismatches.is_empty() {
                (ComparisonStatus::Correct, None)
            } else {
                let details = mismatches
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                (ComparisonStatus::Incorrect, Some(details))
            }
        }
    };

    ComparisonRecord {
        identifier: name.to_string(),
        ground_truth: Some(expected.clone()),
        predicted: Some(predicted.clone()),
        status,
        details,
    }
}
