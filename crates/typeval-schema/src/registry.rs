//! Named JSON Schemas for every record typeval reads and every result it
//! writes.
//!
//! Schemas are derived from the typeval-core types with
//! [`schemars::schema_for!`] once, when the registry is built, and compiled
//! into `jsonschema` validators on demand.

use std::collections::BTreeMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, Value>,
}

/// Derive the schema for `$ty` and store it under `$name`.
///
/// A derived schema is plain JSON, so `to_value` cannot fail here.
macro_rules! register {
    ($map:expr, $name:literal => $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Derive every wire, resolved and result schema.
    ///
    /// # Panics
    ///
    /// Only if a `schemars` schema fails to convert to `serde_json::Value`,
    /// which derived schemas never do.
    #[must_use]
    pub fn new() -> Self {
        use typeval_core::{entities, responses};

        let mut schemas = BTreeMap::new();

        // what producers hand us
        register!(schemas, "entity_record" => entities::EntityRecord);
        register!(schemas, "ranked_record" => entities::RankedRecord);
        register!(schemas, "candidate" => entities::Candidate);
        register!(schemas, "types_shape" => entities::TypesShape);

        // what the matcher sees
        register!(schemas, "ground_truth_entity" => entities::GroundTruthEntity);
        register!(schemas, "prediction" => entities::Prediction);

        // what we emit
        register!(schemas, "metrics_result" => responses::MetricsResult);
        register!(schemas, "comparison_record" => responses::ComparisonRecord);
        register!(schemas, "evaluation_report" => responses::EvaluationReport);
        register!(schemas, "batch_report" => responses::BatchReport);
        register!(schemas, "check_response" => responses::CheckResponse);

        Self { schemas }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Compile the schema called `name`.
    ///
    /// Loaders compile once per document and reuse the validator for every
    /// record in it.
    ///
    /// # Errors
    ///
    /// `SchemaError::NotFound` for an unregistered name,
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn validator(&self, name: &str) -> Result<jsonschema::Validator, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        jsonschema::validator_for(schema).map_err(|e| SchemaError::Generation(e.to_string()))
    }

    /// Check `instance` against the schema called `name`, collecting every
    /// violation rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// `SchemaError::NotFound` for an unregistered name,
    /// `SchemaError::ValidationFailed` carrying all violation messages.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        match collect_errors(&self.validator(name)?, instance) {
            errors if errors.is_empty() => Ok(()),
            errors => Err(SchemaError::ValidationFailed { errors }),
        }
    }

    /// Registered names in alphabetical order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn collect_errors(validator: &jsonschema::Validator, instance: &Value) -> Vec<String> {
    validator
        .iter_errors(instance)
        .map(|error| error.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use typeval_core::entities::{EntityRecord, ReturnTypes, TypesShape};
    use typeval_core::enums::EntityKind;

    use super::*;

    #[test]
    fn every_schema_is_registered_once() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.list(),
            vec![
                "batch_report",
                "candidate",
                "check_response",
                "comparison_record",
                "entity_record",
                "evaluation_report",
                "ground_truth_entity",
                "metrics_result",
                "prediction",
                "ranked_record",
                "types_shape",
            ]
        );
        assert_eq!(registry.schema_count(), 11);
    }

    #[test]
    fn every_schema_compiles() {
        let registry = SchemaRegistry::new();
        for name in registry.list() {
            assert!(registry.validator(name).is_ok(), "{name} does not compile");
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = SchemaRegistry::new();
        assert!(registry.get("interface").is_none());
        assert!(matches!(
            registry.validate("interface", &json!({})),
            Err(SchemaError::NotFound(name)) if name == "interface"
        ));
    }

    #[test]
    fn serialized_record_passes_its_schema() {
        let record = EntityRecord {
            entity: EntityKind::ClassMethod,
            name: "Cart.total".into(),
            location: None,
            types: TypesShape {
                params: None,
                return_types: ReturnTypes::Single("number".into()),
            },
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(SchemaRegistry::new().validate("entity_record", &value).is_ok());
    }

    #[test]
    fn ranked_return_list_is_a_valid_entity_record() {
        let value = json!({
            "entity": "variable",
            "name": "x",
            "types": {"return": ["string", "number"]}
        });
        assert!(SchemaRegistry::new().validate("entity_record", &value).is_ok());
    }

    #[test]
    fn shape_violations_are_all_reported() {
        let value = json!({
            "entity": "interface",
            "types": {"params": {"a": "number"}}
        });
        let Err(SchemaError::ValidationFailed { errors }) =
            SchemaRegistry::new().validate("entity_record", &value)
        else {
            panic!("expected ValidationFailed");
        };
        // unknown kind, missing name, missing return
        assert!(errors.len() >= 3, "{errors:?}");
    }

    #[test]
    fn ranked_record_requires_candidates() {
        let value = json!({"entity": "function", "name": "f"});
        assert!(SchemaRegistry::new().validate("ranked_record", &value).is_err());
    }
}
