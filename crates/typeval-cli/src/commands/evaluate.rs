use typeval_config::TypevalConfig;
use typeval_core::enums::ComparisonStatus;
use typeval_core::responses::EvaluationReport;
use typeval_schema::SchemaRegistry;

use crate::cli::root_commands::EvaluateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared;
use crate::output::output;
use crate::output::rows::ReportView;

/// Handle `tve evaluate`.
pub fn handle(
    args: &EvaluateArgs,
    config: &TypevalConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let (truth, predictions) =
        shared::load_inputs(&registry, &args.inputs.ground_truth, &args.inputs.predictions)?;

    let evaluator = shared::evaluator(config, &args.scoring);
    let evaluation = evaluator.evaluate(&predictions, &truth);
    shared::warn_duplicates(&evaluation, &args.inputs.ground_truth, &evaluator);

    tracing::info!(
        accuracy = evaluation.metrics.accuracy,
        mrr = evaluation.metrics.mrr,
        "evaluation complete"
    );

    let with_details = args.details || config.report.details;
    let comparisons = with_details.then(|| {
        evaluation
            .comparisons
            .into_iter()
            .filter(|record| {
                config.report.include_correct || record.status != ComparisonStatus::Correct
            })
            .collect()
    });

    let report = EvaluationReport {
        generated_at: chrono::Utc::now(),
        metrics: evaluation.metrics,
        comparisons,
    };

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
        OutputFormat::Table | OutputFormat::Markdown => {
            output(&ReportView::from(&report), flags.format)
        }
    }
}
