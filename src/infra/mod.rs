// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system access lives here and nowhere else.
//
//   artifact_store.rs — reads the model, scaler and encoders
//                       JSON artifacts from the artifact
//                       directory and turns every I/O or parse
//                       failure into an ArtifactLoadError
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

/// Model, scaler and encoders loading
pub mod artifact_store;
