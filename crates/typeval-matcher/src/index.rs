//! Exact-name lookup over entity sequences.

use std::collections::BTreeMap;

use typeval_core::entities::{GroundTruthEntity, Prediction};
use typeval_core::enums::DuplicatePolicy;

/// Anything addressable by its entity name (`ClassName.methodName` for methods).
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for GroundTruthEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Prediction {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Entities keyed by exact name, iterated in name order.
///
/// When a name repeats, `policy` decides which entry is kept; every repeated
/// name is recorded in [`NameIndex::duplicates`].
#[derive(Debug)]
pub struct NameIndex<'a, T> {
    entries: BTreeMap<&'a str, &'a T>,
    duplicates: Vec<&'a str>,
}

impl<'a, T: Named> NameIndex<'a, T> {
    #[must_use]
    pub fn build(items: &'a [T], policy: DuplicatePolicy) -> Self {
        let mut entries = BTreeMap::new();
        let mut duplicates = Vec::new();

        for item in items {
            let name = item.name();
            if entries.contains_key(name) {
                duplicates.push(name);
                if policy == DuplicatePolicy::FirstWins {
                    continue;
                }
            }
            entries.insert(name, item);
        }

        duplicates.sort_unstable();
        duplicates.dedup();
        Self {
            entries,
            duplicates,
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a T> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names that occurred more than once, sorted.
    #[must_use]
    pub fn duplicates(&self) -> &[&'a str] {
        &self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a T)> + '_ {
        self.entries.iter().map(|(name, item)| (*name, *item))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeval_core::entities::Signature;
    use typeval_core::enums::EntityKind;

    fn overloads() -> Vec<GroundTruthEntity> {
        vec![
            GroundTruthEntity::new(EntityKind::Function, "parse", Signature::returning("string")),
            GroundTruthEntity::new(EntityKind::Function, "other", Signature::returning("void")),
            GroundTruthEntity::new(EntityKind::Function, "parse", Signature::returning("number")),
        ]
    }

    #[test]
    fn last_wins_by_default() {
        let items = overloads();
        let index = NameIndex::build(&items, DuplicatePolicy::default());
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("parse").map(|e| e.types.return_type.as_str()),
            Some("number")
        );
        assert_eq!(index.duplicates(), &["parse"]);
    }

    #[test]
    fn first_wins_keeps_earliest() {
        let items = overloads();
        let index = NameIndex::build(&items, DuplicatePolicy::FirstWins);
        assert_eq!(
            index.get("parse").map(|e| e.types.return_type.as_str()),
            Some("string")
        );
    }

    #[test]
    fn iterates_in_name_order() {
        let items = overloads();
        let index = NameIndex::build(&items, DuplicatePolicy::LastWins);
        let names: Vec<&str> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["other", "parse"]);
        assert!(index.contains("other"));
        assert!(!index.contains("Other"));
    }
}
