use typeval_config::TypevalConfig;
use typeval_core::enums::ComparisonStatus;
use typeval_core::responses::ComparisonRecord;
use typeval_schema::SchemaRegistry;

use crate::cli::root_commands::CompareArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared;
use crate::output::output;
use crate::output::rows::ComparisonRow;

/// Handle `tve compare`.
pub fn handle(
    args: &CompareArgs,
    config: &TypevalConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let (truth, predictions) =
        shared::load_inputs(&registry, &args.inputs.ground_truth, &args.inputs.predictions)?;

    let evaluator = shared::evaluator(config, &args.scoring);
    let evaluation = evaluator.evaluate(&predictions, &truth);
    shared::warn_duplicates(&evaluation, &args.inputs.ground_truth, &evaluator);

    let wanted: Vec<ComparisonStatus> = args.status.iter().copied().map(Into::into).collect();
    let records = filter_records(evaluation.comparisons, &wanted, config.report.include_correct);

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&records, flags.format),
        OutputFormat::Table | OutputFormat::Markdown => {
            let rows: Vec<ComparisonRow> = records.iter().map(ComparisonRow::from).collect();
            output(&rows, flags.format)
        }
    }
}

/// An explicit status filter wins over `include_correct`.
fn filter_records(
    records: Vec<ComparisonRecord>,
    wanted: &[ComparisonStatus],
    include_correct: bool,
) -> Vec<ComparisonRecord> {
    records
        .into_iter()
        .filter(|record| {
            if wanted.is_empty() {
                include_correct || record.status != ComparisonStatus::Correct
            } else {
                wanted.contains(&record.status)
            }
        })
        .collect()
}
