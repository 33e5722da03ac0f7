// ============================================================
// Layer 4 — Label Encoder
// ============================================================
// Turns a category label into the integer the model was fit on.
//
// The artifact stores the class list in ordinal order, exactly
// like a fitted label encoder's `classes_`:
//
//   { "classes": ["College", "High School", "Postgraduate"] }
//
//   "College"      → 0
//   "High School"  → 1
//   "Postgraduate" → 2
//
// Lookup is case-sensitive and exact: "college" is unknown.
// An index map is built once at load so encode() is O(1).
//
// Reference: Rust Book §8 (Hash Maps)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::traits::CategoricalEncoder;

/// On-disk shape of one encoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoderArtifact {
    #[serde(alias = "classes_")]
    classes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LabelEncoderArtifact")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index:   HashMap<String, usize>,
}

impl LabelEncoder {
    /// Build an encoder from its ordered class list.
    /// Rejects empty lists and duplicate labels.
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("encoder has no classes".to_string());
        }

        let mut index = HashMap::with_capacity(classes.len());
        for (ordinal, label) in classes.iter().enumerate() {
            if index.insert(label.clone(), ordinal).is_some() {
                return Err(format!("encoder lists class '{label}' twice"));
            }
        }

        Ok(Self { classes, index })
    }
}

impl TryFrom<LabelEncoderArtifact> for LabelEncoder {
    type Error = String;

    fn try_from(raw: LabelEncoderArtifact) -> Result<Self, Self::Error> {
        LabelEncoder::new(raw.classes)
    }
}

impl CategoricalEncoder for LabelEncoder {
    fn known_classes(&self) -> &[String] {
        &self.classes
    }

    fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }
}
