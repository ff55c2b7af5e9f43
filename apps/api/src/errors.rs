use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::validation::RequestError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields: studentInfo and answers")]
    MissingFields {
        has_student_info: bool,
        has_answers: bool,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    /// `detail` is only populated outside production.
    #[error("Internal server error: {message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl AppError {
    /// Wraps any failure as a 500, logging the full chain server-side.
    pub fn internal(err: anyhow::Error, expose_detail: bool) -> Self {
        tracing::error!("Analysis error: {err:?}");
        AppError::Internal {
            message: err.to_string(),
            detail: expose_detail.then(|| format!("{err:?}")),
        }
    }

    pub fn from_request_error(err: RequestError, expose_detail: bool) -> Self {
        match err {
            RequestError::MissingFields {
                has_student_info,
                has_answers,
            } => {
                tracing::warn!(has_student_info, has_answers, "Missing required fields");
                AppError::MissingFields {
                    has_student_info,
                    has_answers,
                }
            }
            // A malformed answer list is a scoring failure, not a 400.
            RequestError::Malformed(e) => AppError::internal(e.into(), expose_detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingFields {
                has_student_info,
                has_answers,
            } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "received": {
                        "hasStudentInfo": has_student_info,
                        "hasAnswers": has_answers
                    }
                }),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation error",
                    "message": msg
                }),
            ),
            AppError::Internal { message, detail } => {
                let mut body = json!({
                    "error": "Internal server error",
                    "message": message
                });
                if let Some(detail) = detail {
                    body["stack"] = json!(detail);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_fields_payload() {
        let (status, body) = body_json(AppError::MissingFields {
            has_student_info: true,
            has_answers: false,
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["received"]["hasAnswers"], false);
        assert_eq!(body["received"]["hasStudentInfo"], true);
        assert_eq!(body["error"], "Missing required fields: studentInfo and answers");
    }

    #[tokio::test]
    async fn test_internal_hides_stack_in_production() {
        let (status, body) =
            body_json(AppError::internal(anyhow::anyhow!("boom"), false)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "boom");
        assert!(body.get("stack").is_none());
    }

    #[tokio::test]
    async fn test_internal_includes_stack_in_development() {
        let (_, body) = body_json(AppError::internal(anyhow::anyhow!("boom"), true)).await;
        assert!(body["stack"].as_str().unwrap().contains("boom"));
    }
}
