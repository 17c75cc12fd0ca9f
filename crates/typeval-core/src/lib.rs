//! # typeval-core
//!
//! Core types and error types for typeval.
//!
//! This crate provides the plain data shared across all typeval crates:
//! - Wire records as emitted by ground-truth extractors and predictor back-ends
//! - Internal signature/prediction shapes the matcher works on
//! - Entity kind, comparison status, and duplicate-policy enums
//! - Metrics, comparison, and report response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
