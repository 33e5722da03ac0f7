// ============================================================
// Layer 2 — DescribeUseCase
// ============================================================
// Lists every input field in column order, with its domain and,
// for categorical fields, the labels its encoder knows. Input
// surfaces use this to populate choice lists so users can only
// pick labels the model was fit on.

use serde::Serialize;

use crate::domain::feature_spec::{Domain, FEATURE_SPEC};
use crate::ml::inferencer::Inferencer;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescription {
    pub column: &'static str,
    pub label:  &'static str,
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
}

pub fn describe_fields(inferencer: &Inferencer) -> Vec<FieldDescription> {
    FEATURE_SPEC
        .iter()
        .map(|spec| FieldDescription {
            column:  spec.column,
            label:   spec.label,
            domain:  spec.domain,
            classes: match spec.domain {
                Domain::Categorical { field } => Some(inferencer.known_classes(field).to_vec()),
                _ => None,
            },
        })
        .collect()
}

/// Plain-text table for terminal output.
pub fn format_table(fields: &[FieldDescription]) -> String {
    let width = fields.iter().map(|f| f.column.len()).max().unwrap_or(0);
    fields
        .iter()
        .enumerate()
        .map(|(idx, f)| {
            let domain = match &f.classes {
                Some(classes) => classes.join(" | "),
                None => f.domain.to_string(),
            };
            format!("{idx:>2}  {:<width$}  {domain}", f.column)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
