// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// The loaded artifacts and the code that runs them.
//
//   model.rs      — fitted regression model (linear)
//                   score = intercept + coefficients · row
//
//   context.rs    — InferenceContext: model, scaler and the
//                   three encoders, checked against each other
//                   once at startup and read-only afterwards
//
//   inferencer.rs — one request through the pipeline:
//                   encode → assemble → scale → predict
//
// Reference: Rust Book §16 (Shared-State Concurrency with Arc)
//            Rust Book §17 (Trait Objects)

/// Fitted regression model
pub mod model;

/// Validated, shareable artifact bundle
pub mod context;

/// The per-request inference pipeline
pub mod inferencer;
