use typeval_matcher::normalize;

use crate::cli::root_commands::NormalizeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `tve normalize`.
pub fn handle(args: &NormalizeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let normalized = normalize(&args.type_string);
    match flags.format {
        OutputFormat::Raw => {
            println!("{normalized}");
            Ok(())
        }
        format => output(&normalized, format),
    }
}
