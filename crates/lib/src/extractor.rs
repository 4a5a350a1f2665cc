//! # Extraction Pipeline
//!
//! Runs one extraction request end to end: resolve the category, build the
//! prompt, call the model once, and normalize the reply.

use crate::{
    catalog::{self, GridKind},
    errors::ExtractError,
    normalize,
    prompts::extraction::{build_custom_prompt, build_grid_prompt, build_prompt},
    providers::ai::AiProvider,
    types::{CombinedResult, Document, ExtractionRequest},
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Drives the model for extraction requests.
#[derive(Debug, Clone)]
pub struct Extractor {
    ai_provider: Box<dyn AiProvider>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Extractor {
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Executes a single request. A custom prompt takes precedence over the category.
    pub async fn extract(&self, request: ExtractionRequest) -> Result<CombinedResult, ExtractError> {
        if let Some(custom) = non_blank(request.custom_prompt.as_deref()) {
            info!("[extract] Custom prompt for form type '{}'", request.form_type);
            return self.extract_custom(&request.document, custom).await;
        }

        let category = non_blank(request.category.as_deref())
            .map(catalog::normalize_category)
            .ok_or(ExtractError::MissingCategory)?;
        // Rejects unknown categories before the model is called.
        catalog::fields_for(&category)?;

        if !catalog::resolve_categories(&request.form_type).contains(&category.as_str()) {
            warn!(
                "Category {category} is not listed for form type '{}'; extracting anyway.",
                request.form_type
            );
        }

        info!(
            "[extract] Category {category} for form type '{}'",
            request.form_type
        );
        let mut combined = CombinedResult::new();
        self.extract_category_into(&request.document, &category, &mut combined)
            .await?;
        Ok(combined)
    }

    /// Reads the report at `path` and runs [`Extractor::extract`] on it.
    pub async fn extract_file(
        &self,
        path: &Path,
        form_type: &str,
        category: Option<&str>,
        custom_prompt: Option<&str>,
    ) -> Result<CombinedResult, ExtractError> {
        let data = tokio::fs::read(path).await?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        self.extract(ExtractionRequest {
            document: Document::pdf(data),
            form_type: form_type.to_string(),
            category: category.map(String::from),
            custom_prompt: custom_prompt.map(String::from),
        })
        .await
    }

    /// Extracts every category of `form_type` one after another into a single result.
    ///
    /// Fatal provider errors (quota, transport) stop the run.
    pub async fn extract_all(
        &self,
        document: &Document,
        form_type: &str,
    ) -> Result<CombinedResult, ExtractError> {
        let categories = catalog::resolve_categories(form_type);
        info!(
            "[extract_all] {} categories for form type '{form_type}'",
            categories.len()
        );
        let mut combined = CombinedResult::new();
        for category in categories {
            self.extract_category_into(document, category, &mut combined)
                .await?;
        }
        Ok(combined)
    }

    async fn extract_category_into(
        &self,
        document: &Document,
        category: &str,
        combined: &mut CombinedResult,
    ) -> Result<(), ExtractError> {
        let fields = catalog::fields_for(category)?;
        let prompt = match GridKind::from_category(category) {
            Some(kind) => build_grid_prompt(kind, fields),
            None => build_prompt(category, fields),
        };
        debug!(prompt = %prompt, "--> Prompt for {category}");

        let response = self
            .ai_provider
            .generate_with_document(document, &prompt)
            .await?;
        normalize::normalize_into(combined, category, &response.into_raw_text());
        Ok(())
    }

    async fn extract_custom(
        &self,
        document: &Document,
        user_text: &str,
    ) -> Result<CombinedResult, ExtractError> {
        let prompt = build_custom_prompt(user_text);
        let response = self
            .ai_provider
            .generate_with_document(document, &prompt)
            .await?;
        Ok(normalize::normalize_custom(&response.into_raw_text()))
    }
}
