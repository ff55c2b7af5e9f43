pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::assessment::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Request bodies above this are rejected with 413.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Turns a panic inside a handler into a 500 so other in-flight requests are
/// unaffected.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Unhandled panic while serving request: {detail}");

    AppError::Internal {
        message: "Unhandled error".to_string(),
        detail: None,
    }
    .into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
