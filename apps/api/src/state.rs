use std::sync::Arc;

use crate::db::Store;
use crate::generation::generator::ContentGenerator;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Collaborators are built once in `main` and passed in explicitly.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub llm: Arc<dyn CompletionService>,
}

impl AppState {
    pub fn content_generator(&self) -> ContentGenerator {
        ContentGenerator::new(self.store.clone(), self.llm.clone())
    }
}
