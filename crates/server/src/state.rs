//! # Application State
//!
//! The shared, immutable state handed to every request handler: the loaded
//! configuration and the extraction pipeline with its model provider.

use crate::config::AppConfig;
use appraisal::{providers::factory::create_gemini_provider, Extractor};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The extraction pipeline, backed by the configured Gemini provider.
    pub extractor: Arc<Extractor>,
}

/// Builds the shared application state from the configuration.
///
/// Fails when no Gemini API key is configured.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let settings = config.gemini_settings().ok_or_else(|| {
        anyhow::anyhow!("GEMINI_API_KEY is required to start the extraction server")
    })?;
    let provider = create_gemini_provider(&settings)?;
    info!(model = %config.gemini_model, "Initialized Gemini extraction provider.");

    Ok(AppState {
        config: Arc::new(config),
        extractor: Arc::new(Extractor::new(provider)),
    })
}
