use typeval_config::TypevalConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a config-dependent command to its handler module.
pub fn dispatch(
    command: &Commands,
    config: &TypevalConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Evaluate(args) => commands::evaluate::handle(args, config, flags),
        Commands::Compare(args) => commands::compare::handle(args, config, flags),
        Commands::Batch(args) => commands::batch::handle(args, config, flags),
        Commands::Check(_) | Commands::Normalize(_) | Commands::Schema(_) => {
            unreachable!("check/normalize/schema are pre-dispatched in main")
        }
    }
}
