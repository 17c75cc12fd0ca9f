use typeval_core::responses::CheckResponse;
use typeval_matcher::{is_compatible, normalize};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output::output;

/// Handle `tve check`.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&check(&args.predicted, &args.ground_truth), flags.format)
}

fn check(predicted: &str, ground_truth: &str) -> CheckResponse {
    CheckResponse {
        predicted: predicted.to_string(),
        ground_truth: ground_truth.to_string(),
        normalized_predicted: normalize(predicted),
        normalized_ground_truth: normalize(ground_truth),
        compatible: is_compatible(predicted, ground_truth),
    }
}
