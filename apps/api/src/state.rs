use std::sync::Arc;

use crate::llm_client::ChatCompleter;
use crate::persona::Persona;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Identity and system prompt, computed once at startup and never mutated.
    pub persona: Arc<Persona>,
    /// `None` when no API key is configured; chat requests then fail fast.
    pub llm: Option<Arc<dyn ChatCompleter>>,
}
