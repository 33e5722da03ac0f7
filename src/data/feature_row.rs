// ============================================================
// Layer 4 — Feature Row Assembly
// ============================================================
// Builds the single 16-column row the scaler and model expect.
//
//   FormValues ──► walk FEATURE_SPEC in order
//                    numeric field     → raw value as f64
//                    categorical field → encoder ordinal as f64
//              ──► FeatureRow [f64; 16]
//
// Encoding happens here, before anything numeric runs: an
// unknown label stops assembly with UnknownCategory and the
// scaler and model are never called.
//
// The row is a fixed-size array so a short or long row cannot
// be built by this code; width errors can only come from an
// artifact fit on a different column count.

use crate::domain::error::PredictionError;
use crate::domain::feature_spec::{CategoricalField, Domain, FEATURE_COUNT, FEATURE_SPEC};
use crate::domain::form_values::{FormValues, RawValue};
use crate::domain::traits::CategoricalEncoder;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow([f64; FEATURE_COUNT]);

impl FeatureRow {
    /// Encode the categorical inputs and lay every value out in
    /// column order. `encoder_for` resolves the encoder of each
    /// categorical field.
    pub fn assemble<'a, F>(form: &FormValues, encoder_for: F) -> Result<Self, PredictionError>
    where
        F: Fn(CategoricalField) -> &'a dyn CategoricalEncoder,
    {
        let mut row = [0.0; FEATURE_COUNT];

        for (slot, spec) in row.iter_mut().zip(FEATURE_SPEC.iter()) {
            *slot = match (spec.domain, form.value(spec.field)) {
                (Domain::Categorical { field }, RawValue::Label(label)) => {
                    let ordinal = encoder_for(field).encode(label).ok_or_else(|| {
                        PredictionError::UnknownCategory {
                            field,
                            value: label.to_string(),
                        }
                    })?;
                    ordinal as f64
                }
                (_, RawValue::Number(value)) => value,
                (_, RawValue::Label(_)) => {
                    return Err(PredictionError::PredictorInternal(format!(
                        "column {} received a label but is not categorical",
                        spec.column
                    )))
                }
            };
        }

        Ok(Self(row))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_encoders, scenario_form};

    #[test]
    fn test_scenario_row_layout() {
        let encoders = sample_encoders();
        let row = FeatureRow::assemble(&scenario_form(), |f| encoders.get(f)).unwrap();

        // Internet_Access "Yes" → 1, Peer_Influence "Positive" → 2,
        // Parental_Education_Level "College" → 0
        let expected = [
            5.0, 80.0, 6.0, 7.0, 5.0, 7.0, 75.0, 6.0,
            1.0, 2.0, 50.0, 7.0, 2.0, 3.0, 0.0, 5.0,
        ];
        assert_eq!(row.as_slice(), &expected[..]);
    }

    #[test]
    fn test_unknown_label_stops_assembly() {
        let encoders = sample_encoders();
        let form = FormValues {
            internet_access: "MaybeLater".to_string(),
            ..scenario_form()
        };
        let err = FeatureRow::assemble(&form, |f| encoders.get(f)).unwrap_err();
        assert_eq!(
            err,
            PredictionError::UnknownCategory {
                field: CategoricalField::InternetAccess,
                value: "MaybeLater".to_string(),
            }
        );
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let encoders = sample_encoders();
        let a = FeatureRow::assemble(&scenario_form(), |f| encoders.get(f)).unwrap();
        let b = FeatureRow::assemble(&scenario_form(), |f| encoders.get(f)).unwrap();
        let bits = |r: &FeatureRow| r.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }
}
