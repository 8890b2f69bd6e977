use crate::config::Config;
use crate::layout::PageConfig;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Page geometry for the paginated export — A4, fixed margins.
    pub page_config: PageConfig,
}
