// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The three artifacts are opaque to the pipeline. It only
// needs to ask each one a narrow question:
//
//   CategoricalEncoder — which labels do you know, and what
//                        ordinal does this one map to?
//   FeatureScaler      — transform this row
//   Regressor          — predict a score for this row
//
// Implementations:
//   - LabelEncoder   (data/encoder.rs) → CategoricalEncoder
//   - Scaler         (data/scaler.rs)  → FeatureScaler
//   - LinearRegressor (ml/model.rs)    → Regressor
//
// All three are loaded once and shared read-only between
// requests, hence the Send + Sync bounds.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use crate::domain::error::PredictionError;

// ─── CategoricalEncoder ──────────────────────────────────────────────────────
/// Maps a category label to its integer ordinal.
pub trait CategoricalEncoder: Send + Sync {
    /// Labels this encoder was fit on, in ordinal order.
    fn known_classes(&self) -> &[String];

    /// Ordinal for `label`, or None when the label was never seen.
    fn encode(&self, label: &str) -> Option<usize>;
}

// ─── FeatureScaler ───────────────────────────────────────────────────────────
/// A fixed numeric transform applied to the raw feature row.
pub trait FeatureScaler: Send + Sync {
    /// Row width the scaler was fit on.
    fn n_features(&self) -> usize;

    /// Column names recorded at fit time, when the artifact has them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Scale one row. Fails with VectorShape if `row` has the
    /// wrong width.
    fn transform(&self, row: &[f64]) -> Result<Vec<f64>, PredictionError>;
}

// ─── Regressor ───────────────────────────────────────────────────────────────
/// A pre-trained model producing one real-valued score per row.
pub trait Regressor: Send + Sync {
    fn n_features(&self) -> usize;

    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Predict a score for one scaled row.
    fn predict(&self, row: &[f64]) -> Result<f64, PredictionError>;
}

/// Shared width check used by scaler and model implementations.
pub fn check_width(row: &[f64], expected: usize) -> Result<(), PredictionError> {
    if row.len() == expected {
        Ok(())
    } else {
        Err(PredictionError::VectorShape { expected, actual: row.len() })
    }
}
