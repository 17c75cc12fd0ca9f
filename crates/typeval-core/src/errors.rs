//! Cross-cutting error types for typeval.
//!
//! Domain-specific errors (`SchemaError`, `ConfigError`) are defined in their
//! respective crates. The binary folds everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised while turning wire records into internal shapes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A ground-truth record carried a ranked list of return types.
    #[error("Ground truth for '{name}' has a ranked return list; exactly one return type is required")]
    RankedGroundTruth { name: String },
}
