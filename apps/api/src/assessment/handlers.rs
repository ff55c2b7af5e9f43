//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::assessment::validation::AnalyzeRequest;
use crate::errors::AppError;
use crate::models::AnalysisResult;
use crate::state::AppState;

/// POST /analyze
///
/// Validates `{ studentInfo, answers }` and returns the full analysis.
/// The body is taken raw so missing fields can be reported as
/// `{ hasStudentInfo, hasAnswers }` rather than an extractor rejection.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AppError> {
    let expose_detail = state.config.expose_error_detail();

    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("Request body is not valid JSON: {e}")))?;

    let request = AnalyzeRequest::from_payload(payload)
        .map_err(|e| AppError::from_request_error(e, expose_detail))?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        answers = request.answers.len(),
        grade = %request.student_info.grade,
        "Processing psychometric analysis"
    );

    let result = state.scorer.analyze(&request.student_info, &request.answers);

    info!(
        %request_id,
        careers = result.career_recommendations.len(),
        "Analysis complete"
    );

    Ok(Json(result))
}
