//! Schema validation and loading error types.

use thiserror::Error;

/// Errors from the schema registry and document loaders.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),

    /// The document's top level was not a JSON array.
    #[error("Expected a JSON array of {what} records, found {found}")]
    NotAnArray { what: &'static str, found: &'static str },

    /// One record in a document failed validation or conversion.
    #[error("Invalid {what} record at index {index}: {}", errors.join("; "))]
    InvalidRecord {
        what: &'static str,
        index: usize,
        errors: Vec<String>,
    },

    /// The document could not be parsed.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
