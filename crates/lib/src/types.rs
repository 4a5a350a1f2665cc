use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// MIME type sent with uploaded appraisal reports.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A binary document sent to the model alongside the prompt.
#[derive(Clone)]
pub struct Document {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Document {
    pub fn pdf(data: Vec<u8>) -> Self {
        Self {
            mime_type: PDF_MIME_TYPE.to_string(),
            data,
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// One extraction job: a report, its form type, and what to pull out of it.
///
/// When `custom_prompt` is set it takes precedence over `category`. A request
/// with neither is rejected with [`crate::ExtractError::MissingCategory`].
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub document: Document,
    pub form_type: String,
    pub category: Option<String>,
    pub custom_prompt: Option<String>,
}

/// What the model sent back for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelResponse {
    /// The raw reply text, usually (but not always) a possibly fenced JSON object.
    Text(String),
    /// The model produced no text because of a content-safety block.
    Blocked { reason: String },
}

impl ModelResponse {
    /// The text fed to the normalizer. Blocked replies become a fixed error payload.
    pub fn into_raw_text(self) -> String {
        match self {
            ModelResponse::Text(text) => text,
            ModelResponse::Blocked { reason } => blocked_payload(&reason).to_string(),
        }
    }
}

/// The placeholder recorded for a blocked category.
pub fn blocked_payload(reason: &str) -> Value {
    serde_json::json!({ "error": "Response blocked", "reason": reason })
}

/// The accumulated result of one request, returned verbatim as the response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CombinedResult {
    pub fields: Map<String, Value>,
    pub raw: String,
}

impl CombinedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `--- {header} SECTION ---` block to the raw audit log.
    pub fn push_raw_section(&mut self, header: &str, raw_text: &str) {
        if !self.raw.is_empty() {
            self.raw.push_str("\n\n");
        }
        self.raw
            .push_str(&format!("--- {header} SECTION ---\n{raw_text}"));
    }
}
