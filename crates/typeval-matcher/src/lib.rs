//! # typeval-matcher
//!
//! Decides whether a predicted TypeScript type string satisfies a
//! ground-truth type string, and scores whole batches of predictions.
//!
//! Data flows one way:
//!
//! ```text
//! raw type strings → normalize → is_compatible → types_match → metrics / report
//! ```
//!
//! Everything here is pure and synchronous. Nothing logs; callers decide
//! what to surface.
//!
//! # Usage
//!
//! ```
//! use typeval_core::entities::{GroundTruthEntity, Prediction, Signature};
//! use typeval_core::enums::EntityKind;
//! use typeval_matcher::{calculate_metrics, is_compatible};
//!
//! assert!(is_compatible("string", "string | number"));
//!
//! let truth = vec![GroundTruthEntity::new(
//!     EntityKind::Function,
//!     "add",
//!     Signature::returning("number"),
//! )];
//! let predictions = vec![Prediction::ranked(
//!     EntityKind::Function,
//!     "add",
//!     vec![Signature::returning("string"), Signature::returning("number")],
//! )];
//! let metrics = calculate_metrics(&predictions, &truth);
//! assert_eq!(metrics.correct_predictions, 0);
//! assert!((metrics.mrr - 0.5).abs() < f64::EPSILON);
//! ```

mod compat;
mod entity;
mod evaluator;
mod index;
mod metrics;
mod normalize;
mod object;
mod report;

pub use compat::is_compatible;
pub use entity::{Mismatch, signature_mismatches, types_match};
pub use evaluator::{Evaluation, EvaluationOptions, Evaluator};
pub use index::{Named, NameIndex};
pub use metrics::{calculate_metrics, first_match_rank};
pub use normalize::{is_object_type, normalize, split_top_level};
pub use report::generate_detailed_comparison;
