// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `predict` — one prediction from command-line inputs
//   2. `fields`  — list inputs and their allowed values
//   3. `serve`   — HTTP form endpoint (see web/)
//
// Missing or broken artifacts abort every command with a
// non-zero exit. A failed prediction prints the error line to
// stderr and `run` hands ExitCode::FAILURE back to main.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, FieldsArgs, PredictArgs, ServeArgs};

use crate::application::describe_use_case::{describe_fields, format_table};
use crate::application::predict_use_case::{render, PredictUseCase, SubmissionError};
use crate::application::ServeConfig;
use crate::domain::score::Score;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "exam-score-predictor",
    version,
    about = "Predict a student's exam score from pre-trained model, scaler and encoder artifacts."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Predict(args) => run_predict(args),
            Commands::Fields(args)  => run_fields(args).map(|_| ExitCode::SUCCESS),
            Commands::Serve(args)   => run_serve(args).map(|_| ExitCode::SUCCESS),
        }
    }
}

fn run_predict(args: PredictArgs) -> Result<ExitCode> {
    let outcome = predict(args)?;
    let line    = render(&outcome);

    match outcome {
        Ok(_) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => {
            eprintln!("{line}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Load the artifacts and score the submitted flags. The outer
/// error is an artifact failure, the inner one a rejected
/// submission.
fn predict(args: PredictArgs) -> Result<std::result::Result<Score, SubmissionError>> {
    let (artifacts, form) = args.into_parts();
    let use_case = PredictUseCase::from_config(&artifacts)?;
    Ok(use_case.execute(&form))
}

fn run_fields(args: FieldsArgs) -> Result<()> {
    let use_case = PredictUseCase::from_config(&args.artifacts.into())?;
    let fields   = describe_fields(use_case.inferencer());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("{}", format_table(&fields));
    }
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let cfg: ServeConfig = args.into();
    let use_case = PredictUseCase::from_config(&cfg.artifacts)?;

    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to start the async runtime")?;
    runtime.block_on(crate::web::serve(&cfg.bind, use_case))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    use crate::test_support::write_sample_artifacts;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_predict_flags_build_form() {
        let cli = Cli::try_parse_from([
            "exam-score-predictor", "predict",
            "--hours-studied", "5",
            "--attendance", "80",
            "--internet-access", "Yes",
            "--peer-influence", "Positive",
            "--parental-education-level", "College",
            "--artifact-dir", "models",
        ])
        .unwrap();

        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let (artifacts, form) = args.into_parts();
        assert_eq!(artifacts.artifact_dir, "models");
        assert_eq!(artifacts.scaler_file, "scaler.json");
        assert_eq!(form.hours_studied, 5.0);
        assert_eq!(form.attendance, 80.0);
        assert_eq!(form.motivation_level, 0.0);
        assert_eq!(form.peer_influence, "Positive");
    }

    #[test]
    fn test_predict_requires_labels() {
        let result = Cli::try_parse_from(["exam-score-predictor", "predict", "--attendance", "80"]);
        assert!(result.is_err());
    }

    fn predict_args(artifact_dir: &std::path::Path, extra: &[&str]) -> PredictArgs {
        let dir = artifact_dir.display().to_string();
        let mut argv = vec![
            "exam-score-predictor", "predict",
            "--artifact-dir", dir.as_str(),
            "--internet-access", "Yes",
            "--peer-influence", "Positive",
            "--parental-education-level", "College",
        ];
        argv.extend_from_slice(extra);

        let Commands::Predict(args) = Cli::try_parse_from(argv).unwrap().command else {
            panic!("expected predict");
        };
        args
    }

    fn exit_status(code: ExitCode) -> String {
        format!("{code:?}")
    }

    #[test]
    fn test_negative_flag_reaches_range_check() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_artifacts(dir.path());

        let args = predict_args(dir.path(), &["--attendance", "-5"]);
        assert_eq!(args.attendance, -5.0);

        let err = predict(args).unwrap().unwrap_err();
        assert_eq!(err.kind(), "out_of_range");
        assert!(err.to_string().starts_with("Attendance must be in 0..=100"));
    }

    #[test]
    fn test_failed_prediction_exits_with_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_artifacts(dir.path());

        let mut args = predict_args(dir.path(), &[]);
        args.internet_access = "MaybeLater".to_string();
        let code = run_predict(args).unwrap();
        assert_eq!(exit_status(code), exit_status(ExitCode::FAILURE));
    }

    #[test]
    fn test_successful_prediction_exits_with_success() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_artifacts(dir.path());

        let args = predict_args(dir.path(), &["--hours-studied", "5", "--attendance", "80"]);
        let code = run_predict(args).unwrap();
        assert_eq!(exit_status(code), exit_status(ExitCode::SUCCESS));
    }

    #[test]
    fn test_missing_artifacts_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_predict(predict_args(dir.path(), &[])).is_err());
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["exam-score-predictor", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let cfg: ServeConfig = args.into();
        assert_eq!(cfg, ServeConfig::default());
    }
}
