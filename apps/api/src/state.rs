use std::path::PathBuf;
use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream model. GeminiClient in production, a stub in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Directory holding index.html and results.html.
    pub static_dir: PathBuf,
}
