// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `predict`, `fields`, `serve`
// and all their configurable flags.
//
// The predict flags are the command-line form: one flag per
// column. Numeric flags default to 0 like an untouched widget;
// categorical flags are required because there is no safe
// default label. Numeric flags accept any number, negatives
// included, and are range-checked by the predict use case.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::{ArtifactConfig, ServeConfig};
use crate::domain::form_values::FormValues;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict an exam score for one student
    Predict(PredictArgs),

    /// List the input fields, their ranges, and the known category labels
    Fields(FieldsArgs),

    /// Serve the prediction form over HTTP
    Serve(ServeArgs),
}

/// Where to find the three artifacts. Shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Directory holding the model, scaler and encoders
    #[arg(long, default_value = "artifacts")]
    pub artifact_dir: String,

    /// Regression model file inside the artifact directory
    #[arg(long, default_value = "exam_score_model.json")]
    pub model_file: String,

    /// Feature scaler file inside the artifact directory
    #[arg(long, default_value = "scaler.json")]
    pub scaler_file: String,

    /// Categorical encoders file inside the artifact directory
    #[arg(long, default_value = "label_encoders.json")]
    pub encoders_file: String,
}

impl From<ArtifactArgs> for ArtifactConfig {
    fn from(a: ArtifactArgs) -> Self {
        ArtifactConfig {
            artifact_dir:  a.artifact_dir,
            model_file:    a.model_file,
            scaler_file:   a.scaler_file,
            encoders_file: a.encoders_file,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Hours studied per day (0-24)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hours_studied: f64,

    /// Attendance percentage (0-100)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub attendance: f64,

    /// Parental involvement (0-10)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub parental_involvement: f64,

    /// Access to resources (0-10)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub access_to_resources: f64,

    /// Extracurricular activities (0-10)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub extracurricular_activities: f64,

    /// Sleep hours (0-24)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub sleep_hours: f64,

    /// Previous exam score (0-100)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub previous_scores: f64,

    /// Motivation level (0-10)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub motivation_level: f64,

    /// Internet access label, e.g. "Yes" (see `fields` for the known labels)
    #[arg(long)]
    pub internet_access: String,

    /// Tutoring sessions (0-20)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub tutoring_sessions: f64,

    /// Family income in thousands
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub family_income: f64,

    /// Teacher quality (0-10)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub teacher_quality: f64,

    /// Peer influence label, e.g. "Positive"
    #[arg(long)]
    pub peer_influence: String,

    /// Physical activity in hours per week (0-20)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub physical_activity: f64,

    /// Parental education level label, e.g. "College"
    #[arg(long)]
    pub parental_education_level: String,

    /// Distance from home in km
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub distance_from_home: f64,
}

impl PredictArgs {
    /// Split the parsed flags into artifact location and form values.
    pub fn into_parts(self) -> (ArtifactConfig, FormValues) {
        let form = FormValues {
            hours_studied:              self.hours_studied,
            attendance:                 self.attendance,
            parental_involvement:       self.parental_involvement,
            access_to_resources:        self.access_to_resources,
            extracurricular_activities: self.extracurricular_activities,
            sleep_hours:                self.sleep_hours,
            previous_scores:            self.previous_scores,
            motivation_level:           self.motivation_level,
            internet_access:            self.internet_access,
            tutoring_sessions:          self.tutoring_sessions,
            family_income:              self.family_income,
            teacher_quality:            self.teacher_quality,
            peer_influence:             self.peer_influence,
            physical_activity:          self.physical_activity,
            parental_education_level:   self.parental_education_level,
            distance_from_home:         self.distance_from_home,
        };
        (self.artifacts.into(), form)
    }
}

/// All arguments for the `fields` command
#[derive(Args, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// All arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8501")]
    pub bind: String,
}

impl From<ServeArgs> for ServeConfig {
    fn from(a: ServeArgs) -> Self {
        ServeConfig {
            artifacts: a.artifacts.into(),
            bind:      a.bind,
        }
    }
}
