use std::sync::Arc;

use crate::config::Config;
use crate::matching::screener::ResumeScreener;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Extractor + scorer + analyzer, built once over the process-wide lexicon.
    pub screener: Arc<ResumeScreener>,
}
