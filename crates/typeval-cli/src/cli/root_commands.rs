use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use typeval_core::enums::{ComparisonStatus, DuplicatePolicy};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Score one predictions file against its ground truth.
    Evaluate(EvaluateArgs),
    /// Classify every identifier as correct, incorrect, missing or extra.
    Compare(CompareArgs),
    /// Score every file pair in two directories, matched by file stem.
    Batch(BatchArgs),
    /// Test a single predicted type against a ground-truth type.
    Check(CheckArgs),
    /// Print the canonical form of a type string.
    Normalize(NormalizeArgs),
    /// Print a registered JSON Schema, or list them all.
    Schema(SchemaArgs),
}

/// A ground-truth file and the predictions scored against it.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// Ground-truth records (.json array or .jsonl)
    #[arg(short, long)]
    pub ground_truth: PathBuf,

    /// Prediction records (.json array or .jsonl)
    #[arg(short, long)]
    pub predictions: PathBuf,
}

/// Per-run overrides of the `[evaluation]` config section.
#[derive(Clone, Debug, Default, Args)]
pub struct ScoringArgs {
    /// Score only the top-k candidates of ranked predictions (0 = all)
    #[arg(long)]
    pub max_candidates: Option<usize>,

    /// Which record wins when a name repeats
    #[arg(long, value_enum)]
    pub duplicate_policy: Option<PolicyArg>,
}

#[derive(Clone, Debug, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Include the per-identifier comparison in the report
    #[arg(long)]
    pub details: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Keep only records with this status (repeatable)
    #[arg(short, long, value_enum)]
    pub status: Vec<StatusArg>,
}

#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// Directory of ground-truth files
    #[arg(long)]
    pub ground_truth_dir: PathBuf,

    /// Directory of prediction files named like their ground truth
    #[arg(long)]
    pub predictions_dir: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Predicted type, e.g. "string"
    pub predicted: String,
    /// Ground-truth type, e.g. "string | number"
    pub ground_truth: String,
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// Type string to normalize
    pub type_string: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list every registered name
    pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StatusArg {
    Correct,
    Incorrect,
    Missing,
    Extra,
}

impl From<StatusArg> for ComparisonStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Correct => Self::Correct,
            StatusArg::Incorrect => Self::Incorrect,
            StatusArg::Missing => Self::Missing,
            StatusArg::Extra => Self::Extra,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    LastWins,
    FirstWins,
}

impl From<PolicyArg> for DuplicatePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::LastWins => Self::LastWins,
            PolicyArg::FirstWins => Self::FirstWins,
        }
    }
}
