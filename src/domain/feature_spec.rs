// ============================================================
// Layer 3 — Feature Specification
// ============================================================
// The sixteen student attributes the model was fit on, in the
// exact column order the scaler and model expect.
//
//   index  column                       domain
//   ─────  ───────────────────────────  ─────────────────
//     0    Hours_Studied                0.0 ..= 24.0
//     1    Attendance                   0   ..= 100
//     2    Parental_Involvement         0   ..= 10
//     3    Access_to_Resources          0   ..= 10
//     4    Extracurricular_Activities   0   ..= 10
//     5    Sleep_Hours                  0.0 ..= 24.0
//     6    Previous_Scores              0   ..= 100
//     7    Motivation_Level             0   ..= 10
//     8    Internet_Access              encoder classes
//     9    Tutoring_Sessions            0   ..= 20
//    10    Family_Income                0.0 ..
//    11    Teacher_Quality              0   ..= 10
//    12    Peer_Influence               encoder classes
//    13    Physical_Activity            0   ..= 20
//    14    Parental_Education_Level     encoder classes
//    15    Distance_from_Home           0.0 ..
//
// FEATURE_SPEC is the single source of this order. Vector
// assembly, range checks, artifact feature-name checks and the
// field listing all iterate it, so the order cannot drift
// between them.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::Serialize;
use std::fmt;

/// Number of columns in one feature row.
pub const FEATURE_COUNT: usize = 16;

/// Every input attribute, one variant per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    HoursStudied,
    Attendance,
    ParentalInvolvement,
    AccessToResources,
    ExtracurricularActivities,
    SleepHours,
    PreviousScores,
    MotivationLevel,
    InternetAccess,
    TutoringSessions,
    FamilyIncome,
    TeacherQuality,
    PeerInfluence,
    PhysicalActivity,
    ParentalEducationLevel,
    DistanceFromHome,
}

/// The three attributes that go through a label encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoricalField {
    InternetAccess,
    PeerInfluence,
    ParentalEducationLevel,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 3] = [
        CategoricalField::InternetAccess,
        CategoricalField::PeerInfluence,
        CategoricalField::ParentalEducationLevel,
    ];

    /// Column name, which is also the key in the encoders artifact.
    pub fn column(self) -> &'static str {
        match self {
            CategoricalField::InternetAccess         => "Internet_Access",
            CategoricalField::PeerInfluence          => "Peer_Influence",
            CategoricalField::ParentalEducationLevel => "Parental_Education_Level",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Allowed values for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Domain {
    /// Real-valued input. `max = None` means no upper cap.
    Continuous { min: f64, max: Option<f64> },
    /// Whole-number slider.
    Integer { min: u32, max: u32 },
    /// One of the encoder's known classes.
    Categorical {
        #[serde(skip)]
        field: CategoricalField,
    },
}

impl Domain {
    /// Returns true when `value` lies inside this numeric domain.
    /// Categorical domains never contain a number.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match *self {
            Domain::Continuous { min, max } => {
                value >= min && max.map_or(true, |m| value <= m)
            }
            Domain::Integer { min, max } => {
                value.fract() == 0.0 && value >= min as f64 && value <= max as f64
            }
            Domain::Categorical { .. } => false,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Continuous { min, max: Some(max) } => write!(f, "{min}..={max}"),
            Domain::Continuous { min, max: None }      => write!(f, "{min}.."),
            Domain::Integer { min, max }               => write!(f, "{min}..={max} (whole numbers)"),
            Domain::Categorical { field }              => write!(f, "one of the {field} classes"),
        }
    }
}

/// One column of the feature row.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field:  Field,
    /// Column name used by the artifacts and the form keys
    pub column: &'static str,
    /// Human-readable prompt
    pub label:  &'static str,
    pub domain: Domain,
}

const fn continuous(min: f64, max: f64) -> Domain {
    Domain::Continuous { min, max: Some(max) }
}

const fn unbounded(min: f64) -> Domain {
    Domain::Continuous { min, max: None }
}

const fn integer(min: u32, max: u32) -> Domain {
    Domain::Integer { min, max }
}

const fn categorical(field: CategoricalField) -> Domain {
    Domain::Categorical { field }
}

/// The fixed column order of the model and scaler artifacts.
pub const FEATURE_SPEC: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec { field: Field::HoursStudied,              column: "Hours_Studied",              label: "Hours Studied",                   domain: continuous(0.0, 24.0) },
    FieldSpec { field: Field::Attendance,                column: "Attendance",                 label: "Attendance (%)",                  domain: integer(0, 100) },
    FieldSpec { field: Field::ParentalInvolvement,       column: "Parental_Involvement",       label: "Parental Involvement (0-10)",     domain: integer(0, 10) },
    FieldSpec { field: Field::AccessToResources,         column: "Access_to_Resources",        label: "Access to Resources (0-10)",      domain: integer(0, 10) },
    FieldSpec { field: Field::ExtracurricularActivities, column: "Extracurricular_Activities", label: "Extracurricular Activities (0-10)", domain: integer(0, 10) },
    FieldSpec { field: Field::SleepHours,                column: "Sleep_Hours",                label: "Sleep Hours",                     domain: continuous(0.0, 24.0) },
    FieldSpec { field: Field::PreviousScores,            column: "Previous_Scores",            label: "Previous Exam Scores",            domain: integer(0, 100) },
    FieldSpec { field: Field::MotivationLevel,           column: "Motivation_Level",           label: "Motivation Level (0-10)",         domain: integer(0, 10) },
    FieldSpec { field: Field::InternetAccess,            column: "Internet_Access",            label: "Internet Access",                 domain: categorical(CategoricalField::InternetAccess) },
    FieldSpec { field: Field::TutoringSessions,          column: "Tutoring_Sessions",          label: "Tutoring Sessions",               domain: integer(0, 20) },
    FieldSpec { field: Field::FamilyIncome,              column: "Family_Income",              label: "Family Income (in 1000s)",        domain: unbounded(0.0) },
    FieldSpec { field: Field::TeacherQuality,            column: "Teacher_Quality",            label: "Teacher Quality (0-10)",          domain: integer(0, 10) },
    FieldSpec { field: Field::PeerInfluence,             column: "Peer_Influence",             label: "Peer Influence",                  domain: categorical(CategoricalField::PeerInfluence) },
    FieldSpec { field: Field::PhysicalActivity,          column: "Physical_Activity",          label: "Physical Activity (hrs/week)",    domain: integer(0, 20) },
    FieldSpec { field: Field::ParentalEducationLevel,    column: "Parental_Education_Level",   label: "Parental Education Level",        domain: categorical(CategoricalField::ParentalEducationLevel) },
    FieldSpec { field: Field::DistanceFromHome,          column: "Distance_from_Home",         label: "Distance from Home (in km)",      domain: unbounded(0.0) },
];

/// Column names in feature order.
pub fn column_names() -> impl Iterator<Item = &'static str> {
    FEATURE_SPEC.iter().map(|spec| spec.column)
}

/// Compare an artifact's recorded feature names against FEATURE_SPEC.
/// Returns a description of the first disagreement, if any.
pub fn feature_name_mismatch(names: &[String]) -> Option<String> {
    if names.len() != FEATURE_COUNT {
        return Some(format!(
            "expected {} feature names, artifact lists {}",
            FEATURE_COUNT,
            names.len()
        ));
    }
    column_names()
        .zip(names)
        .enumerate()
        .find(|(_, (expected, actual))| *expected != actual.as_str())
        .map(|(idx, (expected, actual))| {
            format!("column {idx} should be '{expected}' but artifact has '{actual}'")
        })
}
