// ============================================================
// Layer 1 — HTTP Form Endpoint
// ============================================================
// The web surface over the same use cases the CLI drives.
//
//   POST /predict     form-urlencoded submission, keys are the
//                     column names (Hours_Studied=5&...)
//   GET  /api/fields  field list with known category labels
//   GET  /health      liveness
//
// Responses for /predict:
//
//   200  { "score": 67.46, "message": "Predicted Exam Score: ..." }
//   422  { "error": "unknown_category", "message": "Error during ..." }
//        (also out_of_range, and malformed_form when the body
//        is missing a label or a number does not parse)
//   500  { "error": "vector_shape" | "predictor_internal", ... }
//
// Handlers run the synchronous pipeline inline. It is a few
// dozen floating point operations, so there is nothing to gain
// from spawn_blocking.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Serialize;

use crate::application::describe_use_case::{describe_fields, FieldDescription};
use crate::application::predict_use_case::{render, PredictUseCase};
use crate::domain::form_values::FormValues;

#[derive(Debug, Serialize)]
struct PredictResponse {
    score:   f64,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error:   &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn router(use_case: PredictUseCase) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/api/fields", get(fields))
        .route("/health", get(health))
        .with_state(use_case)
}

pub async fn serve(bind: &str, use_case: PredictUseCase) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("Invalid bind address '{bind}'"))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot listen on {addr}"))?;

    tracing::info!("Serving prediction form on http://{}", addr);
    axum::serve(listener, router(use_case))
        .await
        .context("HTTP server stopped unexpectedly")?;
    Ok(())
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

async fn predict(
    State(use_case): State<PredictUseCase>,
    form: Result<Form<FormValues>, FormRejection>,
) -> Result<Json<PredictResponse>, ErrorReply> {
    let Form(form) = form.map_err(malformed)?;

    let outcome = use_case.execute(&form);
    let message = render(&outcome);

    match outcome {
        Ok(score) => Ok(Json(PredictResponse { score: score.value(), message })),
        Err(err) => {
            let status = if err.is_user_error() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            Err((status, Json(ErrorResponse { error: err.kind(), message })))
        }
    }
}

fn malformed(rejection: FormRejection) -> ErrorReply {
    let detail = rejection.body_text();
    tracing::info!("Rejected malformed form: {detail}");
    let status = match rejection.status() {
        StatusCode::BAD_REQUEST => StatusCode::UNPROCESSABLE_ENTITY,
        other                   => other,
    };
    let message = format!("Error during prediction: {detail}");
    (status, Json(ErrorResponse { error: "malformed_form", message }))
}

async fn fields(State(use_case): State<PredictUseCase>) -> Json<Vec<FieldDescription>> {
    Json(describe_fields(use_case.inferencer()))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
