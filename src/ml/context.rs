// ============================================================
// Layer 5 — Inference Context
// ============================================================
// The three loaded artifacts, bundled into one read-only value
// built once at startup and handed to every request.
//
// Construction is where compatibility is checked, so a bad
// artifact set fails before the first request instead of
// silently producing wrong scores:
//
//   - all three categorical encoders are present
//   - scaler and model are both 16 columns wide
//   - any recorded feature names match FEATURE_SPEC exactly
//
// Nothing here is mutable after new() returns; sharing is an
// Arc clone, no locking.

use std::collections::HashMap;

use crate::domain::error::ArtifactLoadError;
use crate::domain::feature_spec::{feature_name_mismatch, CategoricalField, FEATURE_COUNT};
use crate::domain::traits::{CategoricalEncoder, FeatureScaler, Regressor};

type BoxedEncoder = Box<dyn CategoricalEncoder>;

/// One encoder per categorical field.
pub struct EncoderSet {
    internet_access:          BoxedEncoder,
    peer_influence:           BoxedEncoder,
    parental_education_level: BoxedEncoder,
}

impl EncoderSet {
    pub fn new(
        internet_access:          BoxedEncoder,
        peer_influence:           BoxedEncoder,
        parental_education_level: BoxedEncoder,
    ) -> Self {
        Self { internet_access, peer_influence, parental_education_level }
    }

    /// Pick the three encoders out of a column-name → encoder map,
    /// as stored in the encoders artifact. Extra entries are ignored.
    pub fn from_map<E>(mut map: HashMap<String, E>) -> Result<Self, ArtifactLoadError>
    where
        E: CategoricalEncoder + 'static,
    {
        let mut take = |field: CategoricalField| -> Result<BoxedEncoder, ArtifactLoadError> {
            map.remove(field.column())
                .map(|enc| Box::new(enc) as BoxedEncoder)
                .ok_or_else(|| {
                    ArtifactLoadError::Incompatible(format!(
                        "encoders artifact has no entry for '{}'",
                        field.column()
                    ))
                })
        };

        let internet_access          = take(CategoricalField::InternetAccess)?;
        let peer_influence           = take(CategoricalField::PeerInfluence)?;
        let parental_education_level = take(CategoricalField::ParentalEducationLevel)?;

        if !map.is_empty() {
            let mut extra: Vec<&String> = map.keys().collect();
            extra.sort();
            tracing::debug!("Ignoring encoders for unused columns: {:?}", extra);
        }

        Ok(Self::new(internet_access, peer_influence, parental_education_level))
    }

    pub fn get(&self, field: CategoricalField) -> &dyn CategoricalEncoder {
        match field {
            CategoricalField::InternetAccess         => self.internet_access.as_ref(),
            CategoricalField::PeerInfluence          => self.peer_influence.as_ref(),
            CategoricalField::ParentalEducationLevel => self.parental_education_level.as_ref(),
        }
    }
}

/// Model, scaler and encoders, validated against each other.
pub struct InferenceContext {
    model:    Box<dyn Regressor>,
    scaler:   Box<dyn FeatureScaler>,
    encoders: EncoderSet,
}

impl InferenceContext {
    pub fn new(
        model:    Box<dyn Regressor>,
        scaler:   Box<dyn FeatureScaler>,
        encoders: EncoderSet,
    ) -> Result<Self, ArtifactLoadError> {
        check_columns("scaler", scaler.n_features(), scaler.feature_names())?;
        check_columns("model", model.n_features(), model.feature_names())?;
        Ok(Self { model, scaler, encoders })
    }

    pub fn model(&self) -> &dyn Regressor {
        self.model.as_ref()
    }

    pub fn scaler(&self) -> &dyn FeatureScaler {
        self.scaler.as_ref()
    }

    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }
}

fn check_columns(
    artifact: &str,
    width:    usize,
    names:    Option<&[String]>,
) -> Result<(), ArtifactLoadError> {
    if width != FEATURE_COUNT {
        return Err(ArtifactLoadError::Incompatible(format!(
            "{artifact} expects {width} features, the form produces {FEATURE_COUNT}"
        )));
    }
    if let Some(reason) = names.and_then(feature_name_mismatch) {
        return Err(ArtifactLoadError::Incompatible(format!("{artifact}: {reason}")));
    }
    Ok(())
}
