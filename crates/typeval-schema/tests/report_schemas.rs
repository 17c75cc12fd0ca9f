//! Every result typeval emits must satisfy the schema it publishes.

use std::collections::BTreeMap;

use typeval_core::entities::{GroundTruthEntity, Prediction, Signature};
use typeval_core::enums::{ComparisonStatus, EntityKind};
use typeval_core::responses::{
    BatchReport, CheckResponse, ComparisonRecord, EvaluationReport, FileEvaluation, MetricsResult,
};
use typeval_schema::SchemaRegistry;

fn assert_valid<T: serde::Serialize>(schema: &str, value: &T) {
    let json = serde_json::to_value(value).expect("serializable");
    if let Err(err) = SchemaRegistry::new().validate(schema, &json) {
        panic!("{schema} rejected its own output: {err}\n{json:#}");
    }
}

fn sample_comparisons() -> Vec<ComparisonRecord> {
    let params: BTreeMap<String, String> =
        [("a".to_string(), "number".to_string())].into_iter().collect();
    vec![
        ComparisonRecord {
            identifier: "add".into(),
            ground_truth: Some(GroundTruthEntity::new(
                EntityKind::Function,
                "add",
                Signature {
                    params: Some(params),
                    return_type: "number".into(),
                },
            )),
            predicted: Some(Prediction::ranked(
                EntityKind::Function,
                "add",
                vec![Signature::returning("string"), Signature::returning("number")],
            )),
            status: ComparisonStatus::Incorrect,
            details: Some("return type: expected \"number\", got \"string\"".into()),
        },
        ComparisonRecord {
            identifier: "x".into(),
            ground_truth: Some(GroundTruthEntity::new(
                EntityKind::Variable,
                "x",
                Signature::returning("string"),
            )),
            predicted: None,
            status: ComparisonStatus::Missing,
            details: None,
        },
    ]
}

#[test]
fn evaluation_report_with_and_without_details() {
    let mut report = EvaluationReport {
        generated_at: chrono::Utc::now(),
        metrics: MetricsResult::from_totals(1, 0, 0.5),
        comparisons: None,
    };
    assert_valid("evaluation_report", &report);

    report.comparisons = Some(sample_comparisons());
    assert_valid("evaluation_report", &report);
}

#[test]
fn comparison_records_validate_individually() {
    for record in sample_comparisons() {
        assert_valid("comparison_record", &record);
    }
}

#[test]
fn batch_report_validates() {
    let files = vec![
        FileEvaluation {
            file: "one".into(),
            metrics: MetricsResult::from_totals(2, 1, 1.5),
            missing: 0,
            extra: 1,
        },
        FileEvaluation {
            file: "two".into(),
            metrics: MetricsResult::from_totals(0, 0, 0.0),
            missing: 3,
            extra: 0,
        },
    ];
    let report = BatchReport {
        generated_at: chrono::Utc::now(),
        overall: files.iter().map(|f| f.metrics).sum(),
        files,
    };
    assert_valid("batch_report", &report);
}

#[test]
fn check_response_validates() {
    assert_valid(
        "check_response",
        &CheckResponse {
            predicted: "string".into(),
            ground_truth: "string | number".into(),
            normalized_predicted: "string".into(),
            normalized_ground_truth: "string|number".into(),
            compatible: true,
        },
    );
}

#[test]
fn metrics_schema_rejects_negative_counts() {
    let invalid = serde_json::json!({
        "accuracy": 0.0,
        "mrr": 0.0,
        "total_predictions": -1,
        "correct_predictions": 0,
        "total_reciprocal_rank": 0.0
    });
    assert!(SchemaRegistry::new().validate("metrics_result", &invalid).is_err());
}
