//! Client side of the scoring service: HTTP transport, last-result store and
//! the questionnaire wizard.
//!
//! Transport failures are surfaced exactly once. There is no retry and no
//! explicit timeout; reqwest's defaults apply.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::{AnalysisResult, StudentInfo, UserResponse};

pub mod store;
pub mod wizard;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis failed: {status} {body}")]
    Status { status: u16, body: String },
}

/// Anything that can turn a completed questionnaire into an analysis.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(
        &self,
        info: &StudentInfo,
        responses: &[UserResponse],
    ) -> Result<AnalysisResult, TransportError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzePayload<'a> {
    student_info: &'a StudentInfo,
    answers: &'a [UserResponse],
}

/// Calls `POST {base_url}/analyze` on the scoring service.
#[derive(Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(
        &self,
        info: &StudentInfo,
        responses: &[UserResponse],
    ) -> Result<AnalysisResult, TransportError> {
        let url = self.analyze_url();
        debug!(%url, answers = responses.len(), "Submitting assessment");

        let response = self
            .client
            .post(&url)
            .json(&AnalyzePayload {
                student_info: info,
                answers: responses,
            })
            .send()
            .await
            .map_err(|e| {
                error!("API error: {e}");
                TransportError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("API error: {} {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<AnalysisResult>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scorer::KeywordScorer;
    use crate::config::{Config, Environment};
    use crate::routes::build_router;
    use crate::state::AppState;
    use std::sync::Arc;

    #[test]
    fn test_analyze_url_joins_cleanly() {
        assert_eq!(
            HttpAnalysisClient::new("http://localhost:3000/").analyze_url(),
            "http://localhost:3000/analyze"
        );
        assert_eq!(
            HttpAnalysisClient::new("http://localhost:3000").analyze_url(),
            "http://localhost:3000/analyze"
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let info = StudentInfo {
            favorite_subjects: "Art".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(AnalyzePayload {
            student_info: &info,
            answers: &[],
        })
        .unwrap();
        assert_eq!(value["studentInfo"]["favoriteSubjects"], "Art");
        assert!(value["answers"].as_array().unwrap().is_empty());
    }

    async fn spawn_server() -> String {
        let state = AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                environment: Environment::Production,
            },
            scorer: Arc::new(KeywordScorer),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_round_trip_against_local_server() {
        let client = HttpAnalysisClient::new(spawn_server().await);
        let info = StudentInfo {
            name: "Kai".to_string(),
            age: "13".to_string(),
            grade: "8".to_string(),
            favorite_subjects: "Music".to_string(),
        };
        let result = client.analyze(&info, &[]).await.unwrap();
        assert_eq!(result.personality_traits.len(), 5);
        assert_eq!(result.interest_profile.len(), 6);
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let base = spawn_server().await;
        let client = HttpAnalysisClient {
            client: Client::new(),
            base_url: format!("{base}/missing"),
        };
        let err = client
            .analyze(&StudentInfo::default(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpAnalysisClient::new(format!("http://{addr}"));
        let err = client
            .analyze(&StudentInfo::default(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
