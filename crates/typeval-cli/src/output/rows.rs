//! Flat, human-oriented views of comparison records for table and
//! markdown output. JSON output always carries the full records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use typeval_core::entities::Signature;
use typeval_core::enums::ComparisonStatus;
use typeval_core::responses::{ComparisonRecord, EvaluationReport, MetricsResult};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComparisonRow {
    pub identifier: String,
    pub entity: String,
    pub status: ComparisonStatus,
    pub expected: String,
    pub predicted: String,
    pub details: String,
}

impl From<&ComparisonRecord> for ComparisonRow {
    fn from(record: &ComparisonRecord) -> Self {
        let entity = record
            .ground_truth
            .as_ref()
            .map(|truth| truth.entity)
            .or_else(|| record.predicted.as_ref().map(|p| p.entity))
            .map_or_else(|| String::from("-"), |kind| kind.to_string());

        let expected = record
            .ground_truth
            .as_ref()
            .map_or_else(|| String::from("-"), |truth| signature_text(&truth.types));

        let predicted = record.predicted.as_ref().map_or_else(
            || String::from("-"),
            |prediction| match prediction.candidates.as_slice() {
                [] => String::from("(none)"),
                [only] => signature_text(only),
                [top, rest @ ..] => format!("{} (+{} more)", signature_text(top), rest.len()),
            },
        );

        Self {
            identifier: record.identifier.clone(),
            entity,
            status: record.status,
            expected,
            predicted,
            details: record.details.clone().unwrap_or_else(|| String::from("-")),
        }
    }
}

/// An evaluation report with its comparisons flattened into rows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub generated_at: DateTime<Utc>,
    pub metrics: MetricsResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<ComparisonRow>>,
}

impl From<&EvaluationReport> for ReportView {
    fn from(report: &EvaluationReport) -> Self {
        Self {
            generated_at: report.generated_at,
            metrics: report.metrics,
            comparisons: report
                .comparisons
                .as_ref()
                .map(|records| records.iter().map(ComparisonRow::from).collect()),
        }
    }
}

/// `(a: number, b: number) => number`, or just the return type when the
/// signature has no parameters.
#[must_use]
pub fn signature_text(signature: &Signature) -> String {
    match &signature.params {
        Some(params) if !params.is_empty() => {
            let params = params
                .iter()
                .map(|(name, ty)| format!("{name}: {ty}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({params}) => {}", signature.return_type)
        }
        _ => signature.return_type.clone(),
    }
}
