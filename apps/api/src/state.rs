use std::sync::Arc;

use crate::assessment::scorer::AssessmentScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; scoring keeps no per-request state here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: KeywordScorer.
    pub scorer: Arc<dyn AssessmentScorer>,
}
