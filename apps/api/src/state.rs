use std::sync::Arc;

use crate::config::Config;
use crate::contracts::registry::ContractRegistry;
use crate::llm_client::LlmGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ContractRegistry>,
    /// Pluggable LLM backend. Default: OpenAiClient. Tests substitute a fake.
    pub llm: Arc<dyn LlmGateway>,
    pub config: Config,
}
