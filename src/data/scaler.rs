// ============================================================
// Layer 4 — Feature Scaler
// ============================================================
// Applies the normalisation the model was trained behind.
// Two kinds are understood, selected by the artifact's "kind":
//
//   standard : x' = (x - mean) / scale
//   min_max  : x' = (x - data_min) / (data_max - data_min)
//                   * (hi - lo) + lo
//
// Statistics are fixed when the artifact is loaded; transform()
// is a pure function of its input row.
//
// A zero-range column in min_max is treated as range 1, which
// is how the fitting side stores constant columns. A standard
// scaler with a zero or non-finite scale, and a min_max scaler
// with non-finite bounds, are rejected at load time instead.

use serde::{Deserialize, Serialize};

use crate::domain::error::PredictionError;
use crate::domain::traits::{check_width, FeatureScaler};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    #[serde(alias = "mean_")]
    pub mean:  Vec<f64>,
    #[serde(alias = "scale_")]
    pub scale: Vec<f64>,
    #[serde(default, alias = "feature_names_in_", skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    #[serde(alias = "data_min_")]
    pub data_min: Vec<f64>,
    #[serde(alias = "data_max_")]
    pub data_max: Vec<f64>,
    #[serde(default = "default_feature_range")]
    pub feature_range: (f64, f64),
    #[serde(default, alias = "feature_names_in_", skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

impl Scaler {
    /// Check internal consistency of the loaded statistics.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Scaler::Standard(s) => {
                if s.mean.len() != s.scale.len() {
                    return Err(format!(
                        "standard scaler has {} means but {} scales",
                        s.mean.len(),
                        s.scale.len()
                    ));
                }
                if let Some(idx) = s.scale.iter().position(|v| *v == 0.0 || !v.is_finite()) {
                    return Err(format!("standard scaler has unusable scale at column {idx}"));
                }
                if let Some(idx) = s.mean.iter().position(|v| !v.is_finite()) {
                    return Err(format!("standard scaler has non-finite mean at column {idx}"));
                }
            }
            Scaler::MinMax(s) => {
                if s.data_min.len() != s.data_max.len() {
                    return Err(format!(
                        "min-max scaler has {} minimums but {} maximums",
                        s.data_min.len(),
                        s.data_max.len()
                    ));
                }
                if let Some(idx) = s
                    .data_min
                    .iter()
                    .zip(&s.data_max)
                    .position(|(min, max)| !min.is_finite() || !max.is_finite())
                {
                    return Err(format!("min-max scaler has non-finite bounds at column {idx}"));
                }
                let (lo, hi) = s.feature_range;
                if !(lo < hi) {
                    return Err(format!("min-max scaler feature range ({lo}, {hi}) is empty"));
                }
            }
        }
        Ok(())
    }
}

impl FeatureScaler for Scaler {
    fn n_features(&self) -> usize {
        match self {
            Scaler::Standard(s) => s.mean.len(),
            Scaler::MinMax(s)   => s.data_min.len(),
        }
    }

    fn feature_names(&self) -> Option<&[String]> {
        match self {
            Scaler::Standard(s) => s.feature_names.as_deref(),
            Scaler::MinMax(s)   => s.feature_names.as_deref(),
        }
    }

    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, PredictionError> {
        check_width(row, self.n_features())?;

        let scaled = match self {
            Scaler::Standard(s) => row
                .iter()
                .zip(s.mean.iter().zip(&s.scale))
                .map(|(x, (mean, scale))| (x - mean) / scale)
                .collect(),

            Scaler::MinMax(s) => {
                let (lo, hi) = s.feature_range;
                row.iter()
                    .zip(s.data_min.iter().zip(&s.data_max))
                    .map(|(x, (min, max))| {
                        let range = if max - min == 0.0 { 1.0 } else { max - min };
                        (x - min) / range * (hi - lo) + lo
                    })
                    .collect()
            }
        };

        Ok(scaled)
    }
}
