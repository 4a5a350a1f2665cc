pub mod gemini;
pub mod retry;

use crate::{
    errors::ExtractError,
    types::{Document, ModelResponse},
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a multimodal AI provider.
///
/// Implementations receive the full report and one instruction per call and
/// return the model's reply untouched. Content-safety blocks are reported as
/// [`ModelResponse::Blocked`] rather than as errors.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    async fn generate_with_document(
        &self,
        document: &Document,
        prompt: &str,
    ) -> Result<ModelResponse, ExtractError>;
}

dyn_clone::clone_trait_object!(AiProvider);
