//! Signature-level matching between one prediction and its ground truth.

use std::fmt;

use typeval_core::entities::Signature;

use crate::compat::is_compatible;

/// One reason a predicted signature fails its ground truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Return {
        expected: String,
        actual: String,
    },
    Param {
        name: String,
        expected: String,
        actual: String,
    },
    /// Declared in ground truth, absent from the prediction.
    MissingParam { name: String, expected: String },
    /// Predicted, but not declared in ground truth.
    UnexpectedParam { name: String, actual: String },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return { expected, actual } => {
                write!(f, "return type: expected \"{expected}\", got \"{actual}\"")
            }
            Self::Param {
                name,
                expected,
                actual,
            } => write!(
                f,
                "parameter \"{name}\": expected \"{expected}\", got \"{actual}\""
            ),
            Self::MissingParam { name, expected } => {
                write!(f, "missing parameter \"{name}\": expected \"{expected}\"")
            }
            Self::UnexpectedParam { name, actual } => {
                write!(f, "unexpected parameter \"{name}\": got \"{actual}\"")
            }
        }
    }
}

/// Does a predicted signature match the ground truth?
///
/// The return type must be compatible. When both sides declare params, the
/// parameter names must be identical sets and each type compatible; when
/// either side omits params, parameters are not checked.
#[must_use]
pub fn types_match(predicted: &Signature, ground_truth: &Signature) -> bool {
    signature_mismatches(predicted, ground_truth).is_empty()
}

/// Every incompatibility between `predicted` and `ground_truth`, return type
/// first, then parameters in name order.
#[must_use]
pub fn signature_mismatches(predicted: &Signature, ground_truth: &Signature) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    if !is_compatible(&predicted.return_type, &ground_truth.return_type) {
        mismatches.push(Mismatch::Return {
            expected: ground_truth.return_type.clone(),
            actual: predicted.return_type.clone(),
        });
    }

    let (Some(actual_params), Some(expected_params)) = (&predicted.params, &ground_truth.params)
    else {
        return mismatches;
    };

    for (name, expected) in expected_params {
        match actual_params.get(name) {
            Some(actual) if !is_compatible(actual, expected) => {
                mismatches.push(Mismatch::Param {
                    name: name.clone(),
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
            Some(_) => {}
            None => mismatches.push(Mismatch::MissingParam {
                name: name.clone(),
                expected: expected.clone(),
            }),
        }
    }

    for (name, actual) in actual_params {
        if !expected_params.contains_key(name) {
            mismatches.push(Mismatch::UnexpectedParam {
                name: name.clone(),
                actual: actual.clone(),
            });
        }
    }

    mismatches
}
