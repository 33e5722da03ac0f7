// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Runs one prediction request through the pipeline:
//
//   encode categoricals → assemble row → scale → predict
//
// Synchronous and stateless per call. The artifacts sit behind
// an Arc so the inferencer can be cloned into every request
// handler without copying them.

use std::sync::Arc;

use crate::data::feature_row::FeatureRow;
use crate::domain::error::{ArtifactLoadError, PredictionError};
use crate::domain::feature_spec::CategoricalField;
use crate::domain::form_values::FormValues;
use crate::domain::score::Score;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::context::InferenceContext;

#[derive(Clone)]
pub struct Inferencer {
    context: Arc<InferenceContext>,
}

impl Inferencer {
    pub fn new(context: InferenceContext) -> Self {
        Self { context: Arc::new(context) }
    }

    /// Load all three artifacts from the store and check that they
    /// fit together. Any failure here is fatal for the process.
    pub fn from_artifacts(store: &ArtifactStore) -> Result<Self, ArtifactLoadError> {
        let context = store.load_context()?;
        tracing::info!("Artifacts loaded from '{}'", store.dir().display());
        Ok(Self::new(context))
    }

    /// Encode and lay out the row without scaling or predicting.
    pub fn assemble(&self, form: &FormValues) -> Result<FeatureRow, PredictionError> {
        let encoders = self.context.encoders();
        FeatureRow::assemble(form, |field| encoders.get(field))
    }

    pub fn predict(&self, form: &FormValues) -> Result<Score, PredictionError> {
        let row    = self.assemble(form)?;
        let scaled = self.context.scaler().transform(row.as_slice())?;
        let raw    = self.context.model().predict(&scaled)?;

        tracing::debug!("Row {:?} scaled to {:?} → {:.4}", row.as_slice(), scaled, raw);
        Ok(Score::new(raw))
    }

    /// Labels accepted for one categorical field, in ordinal order.
    pub fn known_classes(&self, field: CategoricalField) -> &[String] {
        self.context.encoders().get(field).known_classes()
    }
}
