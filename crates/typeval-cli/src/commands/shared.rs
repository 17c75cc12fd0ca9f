use std::path::Path;

use anyhow::Context;
use typeval_config::TypevalConfig;
use typeval_core::entities::{GroundTruthEntity, Prediction};
use typeval_matcher::{Evaluation, EvaluationOptions, Evaluator};
use typeval_schema::{SchemaRegistry, load_ground_truth, load_predictions, read_document};

use crate::cli::root_commands::ScoringArgs;

/// Build an evaluator from config, with command-line flags taking precedence.
#[must_use]
pub fn evaluator(config: &TypevalConfig, scoring: &ScoringArgs) -> Evaluator {
    let max_candidates = match scoring.max_candidates {
        Some(0) => None,
        Some(k) => Some(k),
        None => config.evaluation.candidate_limit(),
    };
    let duplicate_policy = scoring
        .duplicate_policy
        .map_or(config.evaluation.duplicate_policy, Into::into);

    Evaluator::new(EvaluationOptions {
        max_candidates,
        duplicate_policy,
    })
}

/// Read and validate one ground-truth file and one predictions file.
pub fn load_inputs(
    registry: &SchemaRegistry,
    ground_truth: &Path,
    predictions: &Path,
) -> anyhow::Result<(Vec<GroundTruthEntity>, Vec<Prediction>)> {
    let document = read_document(ground_truth)
        .with_context(|| format!("failed to read {}", ground_truth.display()))?;
    let truth = load_ground_truth(registry, &document)
        .with_context(|| format!("invalid ground truth in {}", ground_truth.display()))?;

    let document = read_document(predictions)
        .with_context(|| format!("failed to read {}", predictions.display()))?;
    let predicted = load_predictions(registry, &document)
        .with_context(|| format!("invalid predictions in {}", predictions.display()))?;

    tracing::info!(
        ground_truth = truth.len(),
        predictions = predicted.len(),
        "inputs loaded"
    );
    Ok((truth, predicted))
}

/// Surface repeated ground-truth names; only one of each was scored.
pub fn warn_duplicates(evaluation: &Evaluation, source: &Path, evaluator: &Evaluator) {
    for name in &evaluation.duplicate_ground_truth {
        tracing::warn!(
            file = %source.display(),
            name = %name,
            policy = %evaluator.options().duplicate_policy,
            "duplicate ground-truth name"
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use typeval_config::TypevalConfig;
    use typeval_core::enums::DuplicatePolicy;

    use super::evaluator;
    use crate::cli::root_commands::{PolicyArg, ScoringArgs};

    #[test]
    fn config_applies_without_flags() {
        let mut config = TypevalConfig::default();
        config.evaluation.max_candidates = 3;
        config.evaluation.duplicate_policy = DuplicatePolicy::FirstWins;

        let options = *evaluator(&config, &ScoringArgs::default()).options();
        assert_eq!(options.max_candidates, Some(3));
        assert_eq!(options.duplicate_policy, DuplicatePolicy::FirstWins);
    }

    #[test]
    fn flags_override_config() {
        let mut config = TypevalConfig::default();
        config.evaluation.max_candidates = 3;

        let scoring = ScoringArgs {
            max_candidates: Some(0),
            duplicate_policy: Some(PolicyArg::LastWins),
        };
        let options = *evaluator(&config, &scoring).options();
        assert_eq!(options.max_candidates, None);
        assert_eq!(options.duplicate_policy, DuplicatePolicy::LastWins);
    }
}
