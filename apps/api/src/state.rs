use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let llm = LlmClient::new(
            config.anthropic_api_key.clone(),
            config.anthropic_api_url.clone(),
        )?;
        Ok(Self { llm: Arc::new(llm) })
    }
}
