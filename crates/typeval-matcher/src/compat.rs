//! Directional structural compatibility between two type strings.

use crate::normalize::{is_object_type, normalize, split_top_level, strip_enclosing_parens};
use crate::object::objects_compatible;

const ARRAY_SUFFIX: &str = "array";

/// Does `predicted` satisfy `ground_truth`?
///
/// Not symmetric. A ground-truth union is satisfied by any one member, but a
/// predicted union is only accepted on exact match. `any` is a wildcard on
/// either side; `unknown` only when predicted.
///
/// Recursion always moves to strictly shorter substrings, so it terminates.
#[must_use]
pub fn is_compatible(predicted: &str, ground_truth: &str) -> bool {
    let predicted = normalize(predicted);
    let ground_truth = normalize(ground_truth);
    compatible_normalized(
        strip_enclosing_parens(&predicted),
        strip_enclosing_parens(&ground_truth),
    )
}

fn compatible_normalized(predicted: &str, ground_truth: &str) -> bool {
    if predicted == ground_truth {
        return true;
    }

    if is_object_type(predicted) && is_object_type(ground_truth) {
        return objects_compatible(predicted, ground_truth);
    }

    let members = split_top_level(ground_truth, '|');
    if members.len() > 1 {
        return members
            .into_iter()
            .any(|member| is_compatible(predicted, member));
    }

    if let (Some(predicted_element), Some(expected_element)) = (
        predicted.strip_suffix(ARRAY_SUFFIX),
        ground_truth.strip_suffix(ARRAY_SUFFIX),
    ) {
        return is_compatible(predicted_element, expected_element);
    }

    basic_compatible(predicted, ground_truth)
}

fn basic_compatible(predicted: &str, ground_truth: &str) -> bool {
    predicted == ground_truth
        || predicted == "any"
        || ground_truth == "any"
        || predicted == "unknown"
}
