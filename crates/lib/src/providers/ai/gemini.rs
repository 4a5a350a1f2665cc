use crate::{
    errors::ExtractError,
    providers::ai::{retry::RetryPolicy, AiProvider},
    types::{Document, ModelResponse},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use tracing::{debug, warn};

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Finish reasons that mean the candidate's text was withheld by a content filter.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

impl GeminiResponse {
    /// Collapses the reply into text, or a block with the most specific reason available.
    fn into_model_response(self) -> ModelResponse {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return ModelResponse::Blocked { reason };
        }

        let candidate = self.candidates.into_iter().next();
        let finish_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.clone())
            .filter(|reason| BLOCKING_FINISH_REASONS.contains(&reason.as_str()));
        let text: String = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            ModelResponse::Blocked {
                reason: finish_reason.unwrap_or_else(|| "Unknown".to_string()),
            }
        } else {
            ModelResponse::Text(text)
        }
    }
}

// --- Gemini Provider implementation ---

/// A provider for the Google Gemini `generateContent` REST API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_url", &self.api_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(api_url: String, api_key: String) -> Result<Self, ExtractError> {
        if api_key.trim().is_empty() {
            return Err(ExtractError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .build()
            .map_err(ExtractError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            retry: RetryPolicy::none(),
        })
    }

    /// Rebuilds the HTTP client with an overall per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ExtractError> {
        self.client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ExtractError::ReqwestClientBuild)?;
        Ok(self)
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn send_once(
        &self,
        request_body: &GeminiRequest<'_>,
    ) -> Result<ModelResponse, ExtractError> {
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(request_body)
            .send()
            .await
            .map_err(ExtractError::AiRequest)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if status == StatusCode::TOO_MANY_REQUESTS || error_text.contains("RESOURCE_EXHAUSTED")
            {
                return Err(ExtractError::QuotaExhausted(error_text));
            }
            return Err(ExtractError::AiApi {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(ExtractError::AiDeserialization)?;

        let model_response = gemini_response.into_model_response();
        if let ModelResponse::Blocked { reason } = &model_response {
            warn!("Gemini returned no text. Reason: {reason}");
        }
        Ok(model_response)
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate_with_document(
        &self,
        document: &Document,
        prompt: &str,
    ) -> Result<ModelResponse, ExtractError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: &document.mime_type,
                            data: BASE64.encode(&document.data),
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
        };

        debug!(
            "--> Sending {} byte document and {} char prompt to Gemini",
            document.data.len(),
            prompt.len()
        );
        let response = self.retry.run(|| self.send_once(&request_body)).await?;
        debug!("<-- Gemini response: {response:?}");
        Ok(response)
    }
}
