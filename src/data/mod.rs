// ============================================================
// Layer 4 — Feature Pipeline
// ============================================================
// Everything between the raw form values and the row the model
// sees. The pipeline flows in this order:
//
//   FormValues
//       │
//       ▼
//   LabelEncoder      → categorical labels become ordinals
//       │
//       ▼
//   FeatureRow        → 16 values in fixed column order
//       │
//       ▼
//   Scaler            → standard or min-max normalisation
//       │
//       ▼
//   (Layer 5) Regressor
//
// Each module is responsible for exactly one step, and each is
// testable without loading artifacts from disk.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Category label → ordinal lookup
pub mod encoder;

/// Fixed-order row assembly
pub mod feature_row;

/// Standard and min-max feature scaling
pub mod scaler;
