//! Scoring configuration.

use serde::{Deserialize, Serialize};
use typeval_core::enums::DuplicatePolicy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EvaluationConfig {
    /// Score only the top-k candidates of ranked predictions. `0` scores all.
    #[serde(default)]
    pub max_candidates: usize,

    /// Which record wins when a name repeats in one input file.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl EvaluationConfig {
    /// The candidate limit, with `0` meaning "no limit".
    #[must_use]
    pub const fn candidate_limit(&self) -> Option<usize> {
        match self.max_candidates {
            0 => None,
            k => Some(k),
        }
    }
}
