use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::record::{
    EntityRecord, Location, PredictionRecord, RankedRecord, ReturnTypes, TypesShape,
};
use crate::enums::EntityKind;
use crate::errors::CoreError;

/// One concrete parameter/return signature.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Signature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
    #[serde(rename = "return")]
    pub return_type: String,
}

impl Signature {
    /// A signature with a return type and no parameter constraint.
    #[must_use]
    pub fn returning(return_type: impl Into<String>) -> Self {
        Self {
            params: None,
            return_type: return_type.into(),
        }
    }

    /// Attach parameters, replacing any existing ones.
    #[must_use]
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params = Some(
            params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

impl TypesShape {
    /// Expand into rank-ordered signatures. Params are shared by every
    /// candidate; only the return type varies.
    #[must_use]
    pub fn into_signatures(self) -> Vec<Signature> {
        let params = self.params;
        match self.return_types {
            ReturnTypes::Single(return_type) => vec![Signature {
                params,
                return_type,
            }],
            ReturnTypes::Ranked(types) => types
                .into_iter()
                .map(|return_type| Signature {
                    params: params.clone(),
                    return_type,
                })
                .collect(),
        }
    }
}

/// A ground-truth entity with exactly one authoritative signature.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroundTruthEntity {
    pub entity: EntityKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub types: Signature,
}

impl GroundTruthEntity {
    #[must_use]
    pub fn new(entity: EntityKind, name: impl Into<String>, types: Signature) -> Self {
        Self {
            entity,
            name: name.into(),
            location: None,
            types,
        }
    }
}

impl TryFrom<EntityRecord> for GroundTruthEntity {
    type Error = CoreError;

    fn try_from(record: EntityRecord) -> Result<Self, Self::Error> {
        let return_type = match record.types.return_types {
            ReturnTypes::Single(ty) => ty,
            ReturnTypes::Ranked(_) => {
                return Err(CoreError::RankedGroundTruth { name: record.name });
            }
        };
        Ok(Self {
            entity: record.entity,
            name: record.name,
            location: record.location,
            types: Signature {
                params: record.types.params,
                return_type,
            },
        })
    }
}

/// A prediction resolved to its ranked candidate signatures.
///
/// `candidates[0]` is the top-1 guess. An empty list never matches.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Prediction {
    pub entity: EntityKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub candidates: Vec<Signature>,
    /// Produced from a ranked shape (a `return` list or a `candidates`
    /// list). Ranking scans candidates by return type only.
    #[serde(default)]
    pub ranked: bool,
}

impl Prediction {
    /// A single-guess prediction.
    #[must_use]
    pub fn single(entity: EntityKind, name: impl Into<String>, types: Signature) -> Self {
        Self {
            ranked: false,
            ..Self::ranked(entity, name, vec![types])
        }
    }

    #[must_use]
    pub fn ranked(entity: EntityKind, name: impl Into<String>, candidates: Vec<Signature>) -> Self {
        Self {
            entity,
            name: name.into(),
            location: None,
            candidates,
            ranked: true,
        }
    }

    /// The most-confident candidate, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Signature> {
        self.candidates.first()
    }
}

impl From<EntityRecord> for Prediction {
    fn from(record: EntityRecord) -> Self {
        let ranked = matches!(record.types.return_types, ReturnTypes::Ranked(_));
        Self {
            entity: record.entity,
            name: record.name,
            location: record.location,
            candidates: record.types.into_signatures(),
            ranked,
        }
    }
}

impl From<RankedRecord> for Prediction {
    fn from(record: RankedRecord) -> Self {
        Self {
            entity: record.entity,
            name: record.name,
            location: record.location,
            candidates: record
                .candidates
                .into_iter()
                .flat_map(|candidate| candidate.types.into_signatures())
                .collect(),
            ranked: true,
        }
    }
}

impl From<PredictionRecord> for Prediction {
    fn from(record: PredictionRecord) -> Self {
        match record {
            PredictionRecord::Ranked(ranked) => ranked.into(),
            PredictionRecord::Plain(plain) => plain.into(),
        }
    }
}
