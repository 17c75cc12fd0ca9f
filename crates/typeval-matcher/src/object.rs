//! Object-literal member parsing and width-subtyping check.

use std::collections::BTreeMap;

use crate::compat::is_compatible;
use crate::normalize::split_top_level;

/// One property of an object literal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Property<'a> {
    pub ty: &'a str,
    pub optional: bool,
}

/// Parse `{name:type,other?:type}` into a property map.
///
/// Entries without a `:` are skipped. A `?` directly before the `:` marks the
/// property optional and is not part of the name.
pub(crate) fn parse_members(object: &str) -> BTreeMap<&str, Property<'_>> {
    let body = object
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(object);

    split_top_level(body, ',')
        .into_iter()
        .map(str::trim)
        .filter_map(|member| {
            let colon = split_top_level(member, ':').first().map(|key| key.len())?;
            if colon == member.len() {
                return None;
            }
            let key = member[..colon].trim();
            let ty = member[colon + 1..].trim();
            let (name, optional) = key
                .strip_suffix('?')
                .map_or((key, false), |name| (name.trim_end(), true));
            Some((name, Property { ty, optional }))
        })
        .collect()
}

/// Width subtyping: every required ground-truth property must be present and
/// compatible; optional ones must be compatible when present. Extra predicted
/// properties are ignored.
pub(crate) fn objects_compatible(predicted: &str, ground_truth: &str) -> bool {
    let predicted = parse_members(predicted);
    let required = parse_members(ground_truth);

    required
        .iter()
        .all(|(name, expected)| match predicted.get(name) {
            Some(actual) => is_compatible(actual.ty, expected.ty),
            None => expected.optional,
        })
}
