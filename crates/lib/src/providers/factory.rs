//! # AI Provider Factory
//!
//! Builds the Gemini provider from plain settings so the server and the CLI
//! wire it up the same way.

use crate::{
    errors::ExtractError,
    providers::ai::{gemini::GeminiProvider, retry::RetryPolicy, AiProvider},
};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// The `generateContent` endpoint for a Gemini model.
pub fn gemini_api_url(model: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent")
}

/// Settings for [`create_gemini_provider`].
#[derive(Debug, Clone, Default)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: Option<String>,
    /// Full endpoint URL; overrides the one derived from `model`.
    pub api_url: Option<String>,
    pub timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

/// Creates a boxed Gemini provider.
pub fn create_gemini_provider(
    settings: &GeminiSettings,
) -> Result<Box<dyn AiProvider>, ExtractError> {
    let api_url = match &settings.api_url {
        Some(url) if !url.trim().is_empty() => url.clone(),
        _ => gemini_api_url(settings.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)),
    };
    info!("Configuring Gemini provider with URL: {}", api_url);

    let mut provider =
        GeminiProvider::new(api_url, settings.api_key.clone())?.with_retry(settings.retry);
    if let Some(timeout) = settings.timeout {
        provider = provider.with_timeout(timeout)?;
    }
    Ok(Box::new(provider))
}
