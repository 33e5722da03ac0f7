// ============================================================
// Layer 5 — Regression Model
// ============================================================
// A fitted linear regression:
//
//   score = intercept + Σ coefficients[i] · x[i]
//
// where x is the SCALED feature row. The artifact is the fitted
// coefficient vector and intercept:
//
//   {
//     "kind": "linear",
//     "coefficients": [ 16 numbers ],
//     "intercept": 42.7,
//     "feature_names": [ optional, 16 column names ]
//   }
//
// `coef_`, `intercept_` and `feature_names_in_` are accepted as
// aliases so an exported estimator can be dumped field-for-field.

use serde::{Deserialize, Serialize};

use crate::domain::error::PredictionError;
use crate::domain::traits::{check_width, Regressor};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    Linear(LinearRegressor),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    #[serde(alias = "coef_")]
    pub coefficients: Vec<f64>,
    #[serde(alias = "intercept_")]
    pub intercept: f64,
    #[serde(default, alias = "feature_names_in_", skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl RegressionModel {
    /// Reject coefficient sets that can only ever produce NaN.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            RegressionModel::Linear(m) => {
                if m.coefficients.is_empty() {
                    return Err("linear model has no coefficients".to_string());
                }
                if let Some(idx) = m.coefficients.iter().position(|c| !c.is_finite()) {
                    return Err(format!("linear model has non-finite coefficient at column {idx}"));
                }
                if !m.intercept.is_finite() {
                    return Err("linear model has a non-finite intercept".to_string());
                }
                Ok(())
            }
        }
    }
}

impl Regressor for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError> {
        check_width(row, self.coefficients.len())?;

        let score = self
            .coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (c, x)| acc + c * x);

        if score.is_finite() {
            Ok(score)
        } else {
            Err(PredictionError::PredictorInternal(format!(
                "model produced a non-finite score ({score})"
            )))
        }
    }
}

impl Regressor for RegressionModel {
    fn n_features(&self) -> usize {
        match self {
            RegressionModel::Linear(m) => m.n_features(),
        }
    }

    fn feature_names(&self) -> Option<&[String]> {
        match self {
            RegressionModel::Linear(m) => m.feature_names(),
        }
    }

    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError> {
        match self {
            RegressionModel::Linear(m) => m.predict(row),
        }
    }
}
