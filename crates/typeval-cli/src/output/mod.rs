use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod markdown;
pub mod rows;
pub mod table;

/// One titled grid of cells, the unit both table and markdown render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(table::render_sections(&sections(serde_json::to_value(value)?), options))
        }
        OutputFormat::Markdown => Ok(markdown::render_sections(&sections(
            serde_json::to_value(value)?,
        ))),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Split a JSON value into grids.
///
/// Top-level object fields become one key/value grid (nested objects
/// flattened to dotted keys); arrays of objects become their own grid,
/// titled by field name, after it.
#[must_use]
pub fn sections(value: Value) -> Vec<Section> {
    match value {
        Value::Array(items) => vec![array_section(None, items)],
        Value::Object(map) => object_sections(map),
        scalar => vec![Section {
            title: None,
            headers: vec![String::from("value")],
            rows: vec![vec![value_to_cell(&scalar)]],
        }],
    }
}

fn object_sections(map: Map<String, Value>) -> Vec<Section> {
    let mut fields = Vec::new();
    let mut grids = Vec::new();

    for (key, value) in map {
        match value {
            Value::Array(items) if items.iter().all(Value::is_object) => {
                grids.push(array_section(Some(key), items));
            }
            other => {
                let mut flat = Vec::new();
                flatten(key, other, &mut flat);
                fields.extend(flat.into_iter().map(|(k, v)| vec![k, v]));
            }
        }
    }

    let mut out = Vec::with_capacity(grids.len() + 1);
    if !fields.is_empty() {
        out.push(Section {
            title: None,
            headers: vec![String::from("key"), String::from("value")],
            rows: fields,
        });
    }
    out.extend(grids);
    out
}

fn array_section(title: Option<String>, items: Vec<Value>) -> Section {
    if !items.iter().all(Value::is_object) {
        return Section {
            title,
            headers: vec![String::from("value")],
            rows: items.iter().map(|item| vec![value_to_cell(item)]).collect(),
        };
    }

    let flattened: Vec<Vec<(String, String)>> = items
        .into_iter()
        .map(|item| {
            let mut flat = Vec::new();
            if let Value::Object(map) = item {
                for (key, value) in map {
                    flatten(key, value, &mut flat);
                }
            }
            flat
        })
        .collect();

    let mut headers = Vec::<String>::new();
    for key in flattened.iter().flatten().map(|(key, _)| key) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let rows = flattened
        .iter()
        .map(|flat| {
            headers
                .iter()
                .map(|header| {
                    flat.iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, cell)| cell.clone())
                })
                .collect()
        })
        .collect();

    Section {
        title,
        headers,
        rows,
    }
}

fn flatten(prefix: String, value: Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, nested) in map {
                flatten(format!("{prefix}.{key}"), nested, out);
            }
        }
        other => out.push((prefix, value_to_cell(&other))),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) if v.is_f64() => v
            .as_f64()
            .map_or_else(|| v.to_string(), |f| format!("{f:.4}")),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{Section, render, sections};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        identifier: &'static str,
        compatible: bool,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            identifier: "x",
            compatible: true,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["identifier"], "x");
        assert_eq!(parsed["compatible"], true);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            identifier: "x",
            compatible: false,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert_eq!(out, r#"{"identifier":"x","compatible":false}"#);
    }

    #[test]
    fn object_fields_keep_declaration_order_and_flatten() {
        let got = sections(json!({
            "generated_at": "2026-01-01T00:00:00Z",
            "metrics": {"accuracy": 0.5, "total_predictions": 2}
        }));
        assert_eq!(
            got,
            vec![Section {
                title: None,
                headers: vec!["key".into(), "value".into()],
                rows: vec![
                    vec!["generated_at".into(), "2026-01-01T00:00:00Z".into()],
                    vec!["metrics.accuracy".into(), "0.5000".into()],
                    vec!["metrics.total_predictions".into(), "2".into()],
                ],
            }]
        );
    }

    #[test]
    fn arrays_of_objects_become_titled_grids() {
        let got = sections(json!({
            "overall": {"mrr": 1.0},
            "files": [
                {"file": "a", "missing": 0},
                {"file": "b", "extra": 2}
            ]
        }));
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].title.as_deref(), Some("files"));
        assert_eq!(got[1].headers, vec!["file", "missing", "extra"]);
        assert_eq!(got[1].rows[1], vec!["b", "-", "2"]);
    }

    #[test]
    fn scalars_render_as_single_cell() {
        let got = sections(json!("stringarray"));
        assert_eq!(got[0].rows, vec![vec![String::from("stringarray")]]);
    }
}
