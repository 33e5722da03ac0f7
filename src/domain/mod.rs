// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what a prediction
// request IS: the sixteen input fields and their order, the
// raw form values, the score, the failures, and the seams the
// artifacts plug into.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO artifact formats (JSON lives in data/, ml/ and infra/)
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Column order and per-field domains
pub mod feature_spec;

// The raw inputs of one form submission
pub mod form_values;

// The predicted exam score
pub mod score;

// ArtifactLoadError and PredictionError
pub mod error;

// Encoder, scaler and model abstractions
pub mod traits;
