//! # typeval-schema
//!
//! JSON Schema generation, validation, and input loading for typeval.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas for wire records and results
//! - Loaders that validate ground-truth and prediction documents record by record
//!   and resolve them into the shapes the matcher consumes
//!
//! ## Architecture
//!
//! Types are defined in `typeval-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and
//! loading layer. One malformed record fails the whole document.

mod error;
mod loader;
mod registry;

pub use error::SchemaError;
pub use loader::{load_ground_truth, load_predictions, read_document};
pub use registry::SchemaRegistry;
