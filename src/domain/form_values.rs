// ============================================================
// Layer 3 — Form Values (one prediction request)
// ============================================================
// The raw inputs of a single form submission. Lives only for
// the duration of one predict call and is never persisted.
//
// Serde names match the artifact column names so the HTTP
// form can post `Hours_Studied=5&Attendance=80&...` directly.
// Numeric fields default to 0 when a key is absent, the same
// value an untouched input widget submits. Categorical labels
// have no sensible default and are required.
//
// Every numeric field is carried as f64, including the whole
// number ones. Sign, bounds and integrality are all checked by
// validate_ranges against the field's Domain, so a bad value
// surfaces as a RangeViolation naming the column instead of a
// parse failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::feature_spec::{Field, FEATURE_SPEC};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(rename = "Hours_Studied", default)]
    pub hours_studied: f64,
    #[serde(rename = "Attendance", default)]
    pub attendance: f64,
    #[serde(rename = "Parental_Involvement", default)]
    pub parental_involvement: f64,
    #[serde(rename = "Access_to_Resources", default)]
    pub access_to_resources: f64,
    #[serde(rename = "Extracurricular_Activities", default)]
    pub extracurricular_activities: f64,
    #[serde(rename = "Sleep_Hours", default)]
    pub sleep_hours: f64,
    #[serde(rename = "Previous_Scores", default)]
    pub previous_scores: f64,
    #[serde(rename = "Motivation_Level", default)]
    pub motivation_level: f64,
    #[serde(rename = "Internet_Access")]
    pub internet_access: String,
    #[serde(rename = "Tutoring_Sessions", default)]
    pub tutoring_sessions: f64,
    #[serde(rename = "Family_Income", default)]
    pub family_income: f64,
    #[serde(rename = "Teacher_Quality", default)]
    pub teacher_quality: f64,
    #[serde(rename = "Peer_Influence")]
    pub peer_influence: String,
    #[serde(rename = "Physical_Activity", default)]
    pub physical_activity: f64,
    #[serde(rename = "Parental_Education_Level")]
    pub parental_education_level: String,
    #[serde(rename = "Distance_from_Home", default)]
    pub distance_from_home: f64,
}

/// A single raw input, before any encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Number(f64),
    Label(&'a str),
}

/// A numeric input outside the range its widget allows.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{column} must be in {range}, got {value}")]
pub struct RangeViolation {
    pub column: &'static str,
    pub value:  f64,
    pub range:  String,
}

impl FormValues {
    /// Look up the raw value submitted for one column.
    pub fn value(&self, field: Field) -> RawValue<'_> {
        match field {
            Field::HoursStudied              => RawValue::Number(self.hours_studied),
            Field::Attendance                => RawValue::Number(self.attendance),
            Field::ParentalInvolvement       => RawValue::Number(self.parental_involvement),
            Field::AccessToResources         => RawValue::Number(self.access_to_resources),
            Field::ExtracurricularActivities => RawValue::Number(self.extracurricular_activities),
            Field::SleepHours                => RawValue::Number(self.sleep_hours),
            Field::PreviousScores            => RawValue::Number(self.previous_scores),
            Field::MotivationLevel           => RawValue::Number(self.motivation_level),
            Field::InternetAccess            => RawValue::Label(&self.internet_access),
            Field::TutoringSessions          => RawValue::Number(self.tutoring_sessions),
            Field::FamilyIncome              => RawValue::Number(self.family_income),
            Field::TeacherQuality            => RawValue::Number(self.teacher_quality),
            Field::PeerInfluence             => RawValue::Label(&self.peer_influence),
            Field::PhysicalActivity          => RawValue::Number(self.physical_activity),
            Field::ParentalEducationLevel    => RawValue::Label(&self.parental_education_level),
            Field::DistanceFromHome          => RawValue::Number(self.distance_from_home),
        }
    }

    /// Check every numeric input against its declared domain.
    ///
    /// This is the input widget's job, not the pipeline's: the
    /// CLI and HTTP surfaces call it before predicting. Categorical
    /// labels are left to the encoders.
    pub fn validate_ranges(&self) -> Result<(), RangeViolation> {
        for spec in FEATURE_SPEC.iter() {
            let RawValue::Number(value) = self.value(spec.field) else {
                continue;
            };
            if !spec.domain.contains(value) {
                return Err(RangeViolation {
                    column: spec.column,
                    value,
                    range:  spec.domain.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scenario_form;

    #[test]
    fn test_scenario_is_in_range() {
        assert!(scenario_form().validate_ranges().is_ok());
    }

    #[test]
    fn test_all_zero_numerics_are_valid() {
        // An inattentive user leaving every widget at its default
        let form = FormValues {
            hours_studied: 0.0,
            attendance: 0.0,
            parental_involvement: 0.0,
            access_to_resources: 0.0,
            extracurricular_activities: 0.0,
            sleep_hours: 0.0,
            previous_scores: 0.0,
            motivation_level: 0.0,
            tutoring_sessions: 0.0,
            family_income: 0.0,
            teacher_quality: 0.0,
            physical_activity: 0.0,
            distance_from_home: 0.0,
            ..scenario_form()
        };
        assert!(form.validate_ranges().is_ok());
    }

    #[test]
    fn test_upper_caps_are_valid() {
        let form = FormValues {
            hours_studied: 24.0,
            attendance: 100.0,
            parental_involvement: 10.0,
            access_to_resources: 10.0,
            extracurricular_activities: 10.0,
            sleep_hours: 24.0,
            previous_scores: 100.0,
            motivation_level: 10.0,
            tutoring_sessions: 20.0,
            family_income: 10_000.0,
            teacher_quality: 10.0,
            physical_activity: 20.0,
            distance_from_home: 500.0,
            ..scenario_form()
        };
        assert!(form.validate_ranges().is_ok());
    }

    #[test]
    fn test_out_of_range_names_the_column() {
        let form = FormValues { attendance: 101.0, ..scenario_form() };
        let err = form.validate_ranges().unwrap_err();
        assert_eq!(err.column, "Attendance");
        assert_eq!(err.value, 101.0);
        assert!(err.to_string().contains("Attendance must be in 0..=100"));
    }

    #[test]
    fn test_negative_whole_number_rejected() {
        let form = FormValues { attendance: -5.0, ..scenario_form() };
        let err = form.validate_ranges().unwrap_err();
        assert_eq!(err.column, "Attendance");
        assert_eq!(err.to_string(), "Attendance must be in 0..=100 (whole numbers), got -5");
    }

    #[test]
    fn test_fractional_whole_number_rejected() {
        let form = FormValues { tutoring_sessions: 2.5, ..scenario_form() };
        let err = form.validate_ranges().unwrap_err();
        assert_eq!(err.column, "Tutoring_Sessions");
        assert_eq!(err.value, 2.5);
    }

    #[test]
    fn test_negative_income_rejected() {
        let form = FormValues { family_income: -1.0, ..scenario_form() };
        assert_eq!(form.validate_ranges().unwrap_err().column, "Family_Income");
    }

    #[test]
    fn test_value_lookup_follows_field() {
        let form = scenario_form();
        assert_eq!(form.value(Field::Attendance), RawValue::Number(80.0));
        assert_eq!(form.value(Field::PeerInfluence), RawValue::Label("Positive"));
    }

    #[test]
    fn test_missing_numeric_keys_default_to_zero() {
        let json = r#"{
            "Internet_Access": "Yes",
            "Peer_Influence": "Neutral",
            "Parental_Education_Level": "College"
        }"#;
        let form: FormValues = serde_json::from_str(json).unwrap();
        assert_eq!(form.attendance, 0.0);
        assert_eq!(form.hours_studied, 0.0);
        assert_eq!(form.internet_access, "Yes");
    }

    #[test]
    fn test_missing_label_is_rejected() {
        let json = r#"{ "Internet_Access": "Yes", "Peer_Influence": "Neutral" }"#;
        assert!(serde_json::from_str::<FormValues>(json).is_err());
    }
}
