// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the three pre-built artifacts from disk.
//
// Directory layout (file names are configurable):
//
//   artifacts/
//     exam_score_model.json   ← fitted regression model
//     scaler.json             ← fitted feature scaler
//     label_encoders.json     ← column name → { "classes": [...] }
//
// All three are JSON. Every failure maps to ArtifactLoadError:
//
//   file unreadable        → Missing
//   JSON does not parse    → Corrupt
//   parsed but unusable    → Incompatible
//
// The store never writes; artifacts are produced by whatever
// fitted the model and are read-only here.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::{fs, path::{Path, PathBuf}};

use crate::application::ArtifactConfig;
use crate::data::encoder::LabelEncoder;
use crate::data::scaler::Scaler;
use crate::domain::error::ArtifactLoadError;
use crate::ml::context::{EncoderSet, InferenceContext};
use crate::ml::model::RegressionModel;

pub struct ArtifactStore {
    dir:           PathBuf,
    model_file:    String,
    scaler_file:   String,
    encoders_file: String,
}

impl ArtifactStore {
    pub fn new(cfg: &ArtifactConfig) -> Self {
        Self {
            dir:           PathBuf::from(&cfg.artifact_dir),
            model_file:    cfg.model_file.clone(),
            scaler_file:   cfg.scaler_file.clone(),
            encoders_file: cfg.encoders_file.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_model(&self) -> Result<RegressionModel, ArtifactLoadError> {
        let model: RegressionModel = self.read_json(&self.model_file)?;
        model.validate().map_err(ArtifactLoadError::Incompatible)?;
        Ok(model)
    }

    pub fn load_scaler(&self) -> Result<Scaler, ArtifactLoadError> {
        let scaler: Scaler = self.read_json(&self.scaler_file)?;
        scaler.validate().map_err(ArtifactLoadError::Incompatible)?;
        Ok(scaler)
    }

    pub fn load_encoders(&self) -> Result<EncoderSet, ArtifactLoadError> {
        let map: HashMap<String, LabelEncoder> = self.read_json(&self.encoders_file)?;
        EncoderSet::from_map(map)
    }

    /// Load all three and validate them against each other.
    pub fn load_context(&self) -> Result<InferenceContext, ArtifactLoadError> {
        let model    = self.load_model()?;
        let scaler   = self.load_scaler()?;
        let encoders = self.load_encoders()?;
        InferenceContext::new(Box::new(model), Box::new(scaler), encoders)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, ArtifactLoadError> {
        let path = self.dir.join(file);
        tracing::debug!("Reading artifact '{}'", path.display());

        let bytes = fs::read(&path)
            .map_err(|source| ArtifactLoadError::Missing { path: path.clone(), source })?;

        serde_json::from_slice(&bytes)
            .map_err(|source| ArtifactLoadError::Corrupt { path, source: Box::new(source) })
    }
}
