use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::{StudentInfo, UserResponse};

/// Strongly-typed body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub student_info: StudentInfo,
    pub answers: Vec<UserResponse>,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Missing required fields: studentInfo and answers")]
    MissingFields {
        has_student_info: bool,
        has_answers: bool,
    },

    /// Both fields are present but do not have the expected shape.
    #[error("Malformed assessment payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn is_present(payload: &Value, field: &str) -> bool {
    payload.get(field).is_some_and(|v| !v.is_null())
}

impl AnalyzeRequest {
    /// Validates a raw JSON body into a typed request.
    ///
    /// Absent or null top-level fields are reported together so the caller can
    /// see exactly which ones are missing. Duplicate answers for the same
    /// question collapse to the latest one.
    pub fn from_payload(payload: Value) -> Result<Self, RequestError> {
        let has_student_info = is_present(&payload, "studentInfo");
        let has_answers = is_present(&payload, "answers");
        if !has_student_info || !has_answers {
            return Err(RequestError::MissingFields {
                has_student_info,
                has_answers,
            });
        }

        let mut request: AnalyzeRequest = serde_json::from_value(payload)?;
        request.answers = normalize_responses(request.answers);
        Ok(request)
    }
}

/// Keeps one response per question id. A later answer replaces the earlier one
/// in place, so the order of first appearance is preserved.
pub fn normalize_responses(responses: Vec<UserResponse>) -> Vec<UserResponse> {
    let mut normalized: Vec<UserResponse> = Vec::with_capacity(responses.len());
    for response in responses {
        match normalized
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => *existing = response,
            None => normalized.push(response),
        }
    }
    normalized
}
