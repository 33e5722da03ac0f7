// Shared fixtures for unit tests: a small but realistic artifact
// set and the reference student from the scenario examples.

use std::collections::HashMap;
use std::path::Path;

use crate::data::encoder::LabelEncoder;
use crate::data::scaler::{Scaler, StandardScaler};
use crate::domain::form_values::FormValues;
use crate::ml::context::{EncoderSet, InferenceContext};
use crate::ml::inferencer::Inferencer;
use crate::ml::model::{LinearRegressor, RegressionModel};

const MEAN: [f64; 16] = [
    19.98, 79.98, 1.09, 1.10, 0.60, 7.03, 75.07, 0.91,
    0.92, 1.49, 0.79, 1.20, 1.18, 2.97, 0.90, 0.59,
];

const SCALE: [f64; 16] = [
    5.99, 11.55, 0.70, 0.70, 0.49, 1.47, 14.40, 0.70,
    0.27, 1.23, 0.74, 0.60, 0.76, 1.03, 0.79, 0.66,
];

const COEFFICIENTS: [f64; 16] = [
    1.75, 2.29, 0.68, 0.70, 0.27, -0.02, 0.70, 0.36,
    0.25, 0.62, 0.33, 0.31, 0.40, 0.18, 0.33, -0.30,
];

const INTERCEPT: f64 = 67.24;

fn classes(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

pub fn encoder_map() -> HashMap<String, LabelEncoder> {
    let mut map = HashMap::new();
    map.insert(
        "Internet_Access".to_string(),
        LabelEncoder::new(classes(&["No", "Yes"])).unwrap(),
    );
    map.insert(
        "Peer_Influence".to_string(),
        LabelEncoder::new(classes(&["Negative", "Neutral", "Positive"])).unwrap(),
    );
    map.insert(
        "Parental_Education_Level".to_string(),
        LabelEncoder::new(classes(&["College", "High School", "Postgraduate"])).unwrap(),
    );
    map
}

pub fn sample_encoders() -> EncoderSet {
    EncoderSet::from_map(encoder_map()).unwrap()
}

pub fn sample_scaler() -> Scaler {
    Scaler::Standard(StandardScaler {
        mean:  MEAN.to_vec(),
        scale: SCALE.to_vec(),
        feature_names: None,
    })
}

pub fn sample_model() -> LinearRegressor {
    LinearRegressor {
        coefficients: COEFFICIENTS.to_vec(),
        intercept:    INTERCEPT,
        feature_names: None,
    }
}

pub fn sample_inferencer() -> Inferencer {
    let ctx = InferenceContext::new(
        Box::new(sample_model()),
        Box::new(sample_scaler()),
        sample_encoders(),
    )
    .unwrap();
    Inferencer::new(ctx)
}

/// Write the sample artifact set as JSON under the default names.
pub fn write_sample_artifacts(dir: &Path) {
    let model = RegressionModel::Linear(sample_model());
    std::fs::write(
        dir.join("exam_score_model.json"),
        serde_json::to_string_pretty(&model).unwrap(),
    )
    .unwrap();

    std::fs::write(
        dir.join("scaler.json"),
        serde_json::to_string_pretty(&sample_scaler()).unwrap(),
    )
    .unwrap();

    let encoders = serde_json::json!({
        "Internet_Access":          { "classes": ["No", "Yes"] },
        "Peer_Influence":           { "classes": ["Negative", "Neutral", "Positive"] },
        "Parental_Education_Level": { "classes": ["College", "High School", "Postgraduate"] },
    });
    std::fs::write(dir.join("label_encoders.json"), encoders.to_string()).unwrap();
}

/// The reference student used throughout the scenario tests.
pub fn scenario_form() -> FormValues {
    FormValues {
        hours_studied:              5.0,
        attendance:                 80.0,
        parental_involvement:       6.0,
        access_to_resources:        7.0,
        extracurricular_activities: 5.0,
        sleep_hours:                7.0,
        previous_scores:            75.0,
        motivation_level:           6.0,
        internet_access:            "Yes".to_string(),
        tutoring_sessions:          2.0,
        family_income:              50.0,
        teacher_quality:            7.0,
        peer_influence:             "Positive".to_string(),
        physical_activity:          3.0,
        parental_education_level:   "College".to_string(),
        distance_from_home:         5.0,
    }
}
