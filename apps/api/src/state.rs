use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Production: `GeminiClient`; tests swap in a fake.
    pub generator: Arc<dyn TextGenerator>,
    /// Kept for handlers that grow config knobs; only `main` reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
