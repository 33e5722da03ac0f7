// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// One form submission, end to end:
//
//   Step 1: Range-check numeric inputs   (Layer 3 - domain)
//   Step 2: Encode, assemble, scale      (Layer 4 - data)
//   Step 3: Predict                      (Layer 5 - ml)
//   Step 4: Render a sentence for the user
//
// Failures are typed all the way up to here; `render` is the
// single place they become text.

use anyhow::Result;
use thiserror::Error;

use crate::application::ArtifactConfig;
use crate::domain::error::PredictionError;
use crate::domain::form_values::{FormValues, RangeViolation};
use crate::domain::score::Score;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::inferencer::Inferencer;

/// Everything that can go wrong with a single submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    OutOfRange(#[from] RangeViolation),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl SubmissionError {
    /// True when the user can fix the problem by changing inputs.
    pub fn is_user_error(&self) -> bool {
        match self {
            SubmissionError::OutOfRange(_)   => true,
            SubmissionError::Prediction(err) => err.is_user_error(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::OutOfRange(_)   => "out_of_range",
            SubmissionError::Prediction(err) => err.kind(),
        }
    }
}

#[derive(Clone)]
pub struct PredictUseCase {
    inferencer: Inferencer,
}

impl PredictUseCase {
    pub fn new(inferencer: Inferencer) -> Self {
        Self { inferencer }
    }

    /// Load artifacts and build the use case. Failure here is
    /// fatal: nothing can be predicted without all three.
    pub fn from_config(cfg: &ArtifactConfig) -> Result<Self> {
        let store      = ArtifactStore::new(cfg);
        let inferencer = Inferencer::from_artifacts(&store)?;
        Ok(Self::new(inferencer))
    }

    pub fn inferencer(&self) -> &Inferencer {
        &self.inferencer
    }

    pub fn execute(&self, form: &FormValues) -> Result<Score, SubmissionError> {
        form.validate_ranges()?;

        let score = self.inferencer.predict(form).map_err(|err| {
            if err.is_user_error() {
                tracing::info!("Rejected submission: {err}");
            } else {
                tracing::error!("Prediction failed: {err}");
            }
            err
        })?;

        tracing::info!("Predicted score {:.2}", score.value());
        Ok(score)
    }
}

/// The user-visible line for either outcome.
pub fn render(outcome: &Result<Score, SubmissionError>) -> String {
    match outcome {
        Ok(score) => score.to_string(),
        Err(err)  => format!("Error during prediction: {err}"),
    }
}
