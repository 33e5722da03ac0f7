// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Two closed sets of failures:
//
//   ArtifactLoadError — startup only; the process cannot serve
//                       without all three artifacts, so these
//                       are fatal.
//                       The parse failure behind Corrupt is
//                       boxed so this layer stays independent
//                       of the artifact format.
//   PredictionError   — per request; recovered at the
//                       presentation boundary and shown to the
//                       user as one readable sentence.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::feature_spec::CategoricalField;

/// A model, scaler or encoders artifact could not be used.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("artifact '{}' could not be read: {source}", .path.display())]
    Missing {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact '{}' is corrupt: {source}", .path.display())]
    Corrupt {
        path:   PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("artifacts are incompatible: {0}")]
    Incompatible(String),
}

/// Failure of a single prediction request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("unknown {field} value '{value}'")]
    UnknownCategory {
        field: CategoricalField,
        value: String,
    },

    #[error("feature vector has {actual} values, expected {expected}")]
    VectorShape { expected: usize, actual: usize },

    #[error("predictor failed: {0}")]
    PredictorInternal(String),
}

impl PredictionError {
    /// True for failures caused by what the user typed, as opposed
    /// to a mismatch between this program and its artifacts.
    pub fn is_user_error(&self) -> bool {
        matches!(self, PredictionError::UnknownCategory { .. })
    }

    /// Short machine-readable name, used in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::UnknownCategory { .. } => "unknown_category",
            PredictionError::VectorShape { .. }     => "vector_shape",
            PredictionError::PredictorInternal(_)   => "predictor_internal",
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_names_field_and_value() {
        let err = PredictionError::UnknownCategory {
            field: CategoricalField::InternetAccess,
            value: "MaybeLater".to_string(),
        };
        assert_eq!(err.to_string(), "unknown Internet_Access value 'MaybeLater'");
        assert!(err.is_user_error());
        assert_eq!(err.kind(), "unknown_category");
    }

    #[test]
    fn test_shape_error_is_not_a_user_error() {
        let err = PredictionError::VectorShape { expected: 16, actual: 15 };
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("15 values, expected 16"));
    }

    #[test]
    fn test_missing_artifact_mentions_path() {
        let err = ArtifactLoadError::Missing {
            path:   PathBuf::from("artifacts/scaler.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("artifacts/scaler.json"));
    }

    #[test]
    fn test_corrupt_artifact_keeps_parse_source() {
        let parse: Box<dyn std::error::Error + Send + Sync> = "expected value at line 1".into();
        let err = ArtifactLoadError::Corrupt {
            path:   PathBuf::from("artifacts/exam_score_model.json"),
            source: parse,
        };
        assert_eq!(
            err.to_string(),
            "artifact 'artifacts/exam_score_model.json' is corrupt: expected value at line 1"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "expected value at line 1");
    }
}
