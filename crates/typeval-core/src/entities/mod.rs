//! Entity records and the signature shapes they resolve to.
//!
//! Two layers live here:
//! - **Wire records** ([`EntityRecord`], [`RankedRecord`], [`PredictionRecord`]):
//!   the JSON shapes emitted by ground-truth extractors and predictor back-ends.
//! - **Resolved shapes** ([`GroundTruthEntity`], [`Prediction`], [`Signature`]):
//!   what the matcher consumes. A prediction is always a ranked list of
//!   signatures; a single guess is a list of one.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod record;
mod signature;

pub use record::{
    Candidate, EntityRecord, Location, PredictionRecord, RankedRecord, ReturnTypes, TypesShape,
};
pub use signature::{GroundTruthEntity, Prediction, Signature};
