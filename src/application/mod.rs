// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal:
//
//   predict_use_case  — range-check a form, run the pipeline,
//                       render the result sentence
//   describe_use_case — list the fields with their domains and
//                       known classes, for populating inputs
//
// Rules for this layer:
//   - No scaling or model math here (Layers 4 and 5)
//   - No printing or HTTP here (Layer 1)
//   - Only workflow coordination and configuration
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

use serde::{Deserialize, Serialize};

/// The prediction workflow
pub mod predict_use_case;

/// The field-listing workflow
pub mod describe_use_case;

// ─── Artifact Configuration ──────────────────────────────────────────────────
// Where the three artifacts live. Built from CLI flags; the
// application layer never sees clap types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub artifact_dir:  String,
    pub model_file:    String,
    pub scaler_file:   String,
    pub encoders_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            artifact_dir:  "artifacts".to_string(),
            model_file:    "exam_score_model.json".to_string(),
            scaler_file:   "scaler.json".to_string(),
            encoders_file: "label_encoders.json".to_string(),
        }
    }
}

// ─── Serve Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServeConfig {
    pub artifacts: ArtifactConfig,
    /// Socket address the HTTP form endpoint binds to
    pub bind:      String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactConfig::default(),
            bind:      "127.0.0.1:8501".to_string(),
        }
    }
}
