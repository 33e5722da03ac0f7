// ============================================================
// Layer 3 — Score
// ============================================================
// The model's output for one student. Not clamped: a linear
// model can land outside 0..=100 and that value is shown as-is.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Renders the user-facing result line.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted Exam Score: {:.2} out of 100", self.0)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_rendering() {
        assert_eq!(Score::new(67.456).to_string(), "Predicted Exam Score: 67.46 out of 100");
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let s = Score::new(104.2);
        assert_eq!(s.value(), 104.2);
        assert_eq!(s.to_string(), "Predicted Exam Score: 104.20 out of 100");
    }
}
