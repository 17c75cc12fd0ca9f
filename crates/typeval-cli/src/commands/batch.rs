use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use typeval_config::TypevalConfig;
use typeval_core::enums::ComparisonStatus;
use typeval_core::responses::{BatchReport, FileEvaluation};
use typeval_matcher::Evaluator;
use typeval_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BatchArgs;
use crate::commands::shared;
use crate::output::output;
use crate::progress::Progress;

/// A ground-truth file and the predictions file sharing its stem.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilePair {
    stem: String,
    ground_truth: PathBuf,
    predictions: PathBuf,
}

/// Handle `tve batch`.
pub fn handle(args: &BatchArgs, config: &TypevalConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pairs = pair_files(&args.ground_truth_dir, &args.predictions_dir)?;
    if pairs.is_empty() {
        tracing::warn!(
            ground_truth_dir = %args.ground_truth_dir.display(),
            predictions_dir = %args.predictions_dir.display(),
            "no file pairs to evaluate"
        );
    }

    let registry = SchemaRegistry::new();
    let evaluator = shared::evaluator(config, &args.scoring);
    let files = evaluate_pairs(&pairs, &registry, &evaluator)?;

    let report = BatchReport {
        generated_at: chrono::Utc::now(),
        overall: files.iter().map(|file| file.metrics).sum(),
        files,
    };
    output(&report, flags.format)
}

fn evaluate_pairs(
    pairs: &[FilePair],
    registry: &SchemaRegistry,
    evaluator: &Evaluator,
) -> anyhow::Result<Vec<FileEvaluation>> {
    let progress = Progress::bar(pairs.len() as u64, "evaluating");
    let mut files = Vec::with_capacity(pairs.len());

    for pair in pairs {
        progress.set_message(&pair.stem);
        let (truth, predictions) =
            shared::load_inputs(registry, &pair.ground_truth, &pair.predictions)?;
        let evaluation = evaluator.evaluate(&predictions, &truth);
        shared::warn_duplicates(&evaluation, &pair.ground_truth, evaluator);

        tracing::debug!(file = %pair.stem, accuracy = evaluation.metrics.accuracy, "file evaluated");
        files.push(FileEvaluation {
            file: pair.stem.clone(),
            metrics: evaluation.metrics,
            missing: evaluation.count(ComparisonStatus::Missing) as u64,
            extra: evaluation.count(ComparisonStatus::Extra) as u64,
        });
        progress.inc(1);
    }

    progress.finish_clear();
    Ok(files)
}

/// Match files across the two directories by stem, sorted by stem.
///
/// Unmatched files on either side are skipped with a warning.
fn pair_files(truth_dir: &Path, predictions_dir: &Path) -> anyhow::Result<Vec<FilePair>> {
    let mut predictions: BTreeMap<String, PathBuf> = BTreeMap::new();
    for (stem, path) in document_files(predictions_dir)? {
        predictions.entry(stem).or_insert(path);
    }

    let mut pairs = Vec::new();
    for (stem, ground_truth) in document_files(truth_dir)? {
        match predictions.remove(&stem) {
            Some(prediction_path) => pairs.push(FilePair {
                stem,
                ground_truth,
                predictions: prediction_path,
            }),
            None => tracing::warn!(
                file = %ground_truth.display(),
                "no predictions for ground truth; skipped"
            ),
        }
    }

    for path in predictions.values() {
        tracing::warn!(file = %path.display(), "predictions without ground truth; skipped");
    }

    Ok(pairs)
}

/// `.json` and `.jsonl` files directly inside `dir`, as `(stem, path)`.
/// Extensions match in any case.
fn document_files(dir: &Path) -> anyhow::Result<Vec<(String, PathBuf)>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list {}", dir.display()))?
            .path();
        let is_document = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("jsonl")
            });
        if !path.is_file() || !is_document {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            files.push((stem.to_string(), path.clone()));
        }
    }

    files.sort();
    Ok(files)
}
