//! Validated loading of ground-truth and prediction documents.
//!
//! Each document is a JSON array of records. Every record is validated
//! against its schema before it is deserialized, so the error names the
//! offending index. Nothing is skipped: one bad record fails the document.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use typeval_core::entities::{
    EntityRecord, GroundTruthEntity, Prediction, PredictionRecord, RankedRecord,
};

use crate::error::SchemaError;
use crate::registry::{SchemaRegistry, collect_errors};

const GROUND_TRUTH: &str = "ground truth";
const PREDICTION: &str = "prediction";

/// Read a document from disk as one JSON value.
///
/// `.jsonl` files hold one record per line and are assembled into an array.
/// Blank and whitespace-only lines are skipped. Anything else is parsed as a
/// single JSON document.
///
/// # Errors
///
/// Returns `SchemaError::Io` if the file cannot be read or a JSON Lines
/// record is malformed, and `SchemaError::Parse` for invalid JSON.
pub fn read_document(path: &Path) -> Result<Value, SchemaError> {
    let is_jsonl = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

    if is_jsonl {
        let text = std::fs::read_to_string(path)?;
        let records: String = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .flat_map(|line| [line, "\n"])
            .collect();
        let lines: Vec<Value> = serde_jsonlines::JsonLinesReader::new(records.as_bytes())
            .read_all()
            .collect::<std::io::Result<_>>()?;
        tracing::debug!(path = %path.display(), records = lines.len(), "read JSON Lines document");
        return Ok(Value::Array(lines));
    }

    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| SchemaError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Validate and resolve a ground-truth document.
///
/// # Errors
///
/// Returns `SchemaError::NotAnArray` for a non-array document and
/// `SchemaError::InvalidRecord` for the first record that fails validation,
/// including one whose `return` is a ranked list.
pub fn load_ground_truth(
    registry: &SchemaRegistry,
    document: &Value,
) -> Result<Vec<GroundTruthEntity>, SchemaError> {
    let items = records(document, GROUND_TRUTH)?;
    let validator = registry.validator("entity_record")?;

    let entities = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let record: EntityRecord = parse_record(&validator, item, GROUND_TRUTH, index)?;
            GroundTruthEntity::try_from(record)
                .map_err(|e| invalid(GROUND_TRUTH, index, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(records = entities.len(), "loaded ground truth");
    Ok(entities)
}

/// Validate and resolve a prediction document.
///
/// Records carrying a `candidates` key are ranked records; all others are
/// plain entity records whose `return` may be a string or a ranked list.
///
/// # Errors
///
/// Returns `SchemaError::NotAnArray` for a non-array document and
/// `SchemaError::InvalidRecord` for the first record that fails validation.
pub fn load_predictions(
    registry: &SchemaRegistry,
    document: &Value,
) -> Result<Vec<Prediction>, SchemaError> {
    let items = records(document, PREDICTION)?;
    let plain = registry.validator("entity_record")?;
    let ranked = registry.validator("ranked_record")?;

    let predictions = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let record = if item.get("candidates").is_some() {
                PredictionRecord::Ranked(parse_record::<RankedRecord>(
                    &ranked, item, PREDICTION, index,
                )?)
            } else {
                PredictionRecord::Plain(parse_record::<EntityRecord>(
                    &plain, item, PREDICTION, index,
                )?)
            };
            Ok(Prediction::from(record))
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    tracing::debug!(records = predictions.len(), "loaded predictions");
    Ok(predictions)
}

fn records<'a>(document: &'a Value, what: &'static str) -> Result<&'a [Value], SchemaError> {
    document
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| SchemaError::NotAnArray {
            what,
            found: json_kind(document),
        })
}

fn parse_record<T: DeserializeOwned>(
    validator: &jsonschema::Validator,
    item: &Value,
    what: &'static str,
    index: usize,
) -> Result<T, SchemaError> {
    let errors = collect_errors(validator, item);
    if !errors.is_empty() {
        return Err(SchemaError::InvalidRecord {
            what,
            index,
            errors,
        });
    }
    T::deserialize(item).map_err(|e| invalid(what, index, e.to_string()))
}

fn invalid(what: &'static str, index: usize, message: String) -> SchemaError {
    SchemaError::InvalidRecord {
        what,
        index,
        errors: vec![message],
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn rejects_non_array_document() {
        let err = load_predictions(&registry(), &json!({"name": "add"})).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::NotAnArray {
                what: "prediction",
                found: "object"
            }
        ));
    }

    #[test]
    fn names_the_offending_index() {
        let document = json!([
            {"entity": "function", "name": "ok", "types": {"return": "number"}},
            {"entity": "function", "types": {"return": "number"}}
        ]);
        let err = load_predictions(&registry(), &document).unwrap_err();
        let SchemaError::InvalidRecord { index, errors, .. } = err else {
            panic!("expected InvalidRecord");
        };
        assert_eq!(index, 1);
        assert!(errors.iter().any(|e| e.contains("name")), "{errors:?}");
    }

    #[test]
    fn rejects_unknown_entity_kind() {
        let document = json!([{"entity": "interface", "name": "X", "types": {"return": "object"}}]);
        assert!(matches!(
            load_ground_truth(&registry(), &document),
            Err(SchemaError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_missing_return() {
        let document = json!([{"entity": "variable", "name": "x", "types": {}}]);
        assert!(load_predictions(&registry(), &document).is_err());
    }

    #[test]
    fn rejects_ranked_ground_truth() {
        let document = json!([
            {"entity": "function", "name": "f", "types": {"return": ["string", "number"]}}
        ]);
        let err = load_ground_truth(&registry(), &document).unwrap_err();
        assert!(err.to_string().contains("index 0"), "{err}");
    }

    #[test]
    fn resolves_both_prediction_shapes() {
        let document = json!([
            {"entity": "function", "name": "f",
             "types": {"params": {"a": "number"}, "return": ["string", "number"]}},
            {"entity": "class", "name": "C",
             "candidates": [{"types": {"return": "C"}}, {"types": {"return": "object"}}]}
        ]);
        let predictions = load_predictions(&registry(), &document).unwrap();
        let shapes: Vec<(&str, usize)> = predictions
            .iter()
            .map(|p| (p.name.as_str(), p.candidates.len()))
            .collect();
        assert_eq!(shapes, vec![("f", 2), ("C", 2)]);
    }

    #[test]
    fn reads_json_and_jsonl_files() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("truth.json");
        std::fs::write(
            &json_path,
            r#"[{"entity": "variable", "name": "x", "types": {"return": "string"}}]"#,
        )
        .unwrap();
        let document = read_document(&json_path).unwrap();
        assert_eq!(load_ground_truth(&registry(), &document).unwrap().len(), 1);

        let jsonl_path = dir.path().join("preds.jsonl");
        std::fs::write(
            &jsonl_path,
            "{\"entity\": \"variable\", \"name\": \"x\", \"types\": {\"return\": \"string\"}}\n\
             {\"entity\": \"variable\", \"name\": \"y\", \"types\": {\"return\": \"number\"}}\n",
        )
        .unwrap();
        let document = read_document(&jsonl_path).unwrap();
        assert_eq!(load_predictions(&registry(), &document).unwrap().len(), 2);
    }

    #[test]
    fn jsonl_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preds.JSONL");
        std::fs::write(
            &path,
            "\n{\"entity\": \"variable\", \"name\": \"x\", \"types\": {\"return\": \"string\"}}\n\
             \t \r\n\
             {\"entity\": \"variable\", \"name\": \"y\", \"types\": {\"return\": \"number\"}}\n\n  \n",
        )
        .unwrap();
        let document = read_document(&path).unwrap();
        assert_eq!(document.as_array().map(Vec::len), Some(2));
        assert_eq!(load_predictions(&registry(), &document).unwrap().len(), 2);
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
