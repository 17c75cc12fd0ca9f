use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// Source position of a declaration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// The return type(s) of an entity as they arrive on the wire.
///
/// Ground truth and single-guess predictions carry one string; ranked
/// predictions carry candidates ordered most-confident first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReturnTypes {
    Single(String),
    Ranked(Vec<String>),
}

impl ReturnTypes {
    /// Return types in rank order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&str> {
        match self {
            Self::Single(ty) => vec![ty.as_str()],
            Self::Ranked(types) => types.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for ReturnTypes {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// Parameter and return types of an entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TypesShape {
    /// Parameter name to type string. Absent means "no parameter constraint".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, String>>,
    #[serde(rename = "return")]
    pub return_types: ReturnTypes,
}

/// One declared or predicted entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityRecord {
    pub entity: EntityKind,
    /// `ClassName.methodName` for class methods.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub types: TypesShape,
}

/// A single ranked alternative inside a [`RankedRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Candidate {
    pub types: TypesShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// A prediction that lists whole candidate signatures, most-confident first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RankedRecord {
    pub entity: EntityKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub candidates: Vec<Candidate>,
}

/// Any prediction shape a predictor back-end may emit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum PredictionRecord {
    Ranked(RankedRecord),
    Plain(EntityRecord),
}

impl PredictionRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ranked(record) => &record.name,
            Self::Plain(record) => &record.name,
        }
    }
}
