//! Report rendering configuration.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Keep `correct` rows in comparison output.
    #[serde(default = "default_true")]
    pub include_correct: bool,

    /// Attach the per-identifier comparison to `tve evaluate` output.
    #[serde(default)]
    pub details: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_correct: default_true(),
            details: false,
        }
    }
}
