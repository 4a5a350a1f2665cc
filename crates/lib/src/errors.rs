use thiserror::Error;

/// Custom error types for the extraction library.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error (status {status}): {message}")]
    AiApi { status: u16, message: String },
    #[error(
        "API quota exceeded. Please check your plan and billing details. Original error: {0}"
    )]
    QuotaExhausted(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Unknown category provided: {0}")]
    UnknownCategory(String),
    #[error("No category specified for extraction.")]
    MissingCategory,
    #[error("Model output could not be used: {0}")]
    MalformedModelOutput(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    /// Whether a failed model call is worth repeating.
    ///
    /// Server-side failures and transport hiccups are transient; quota exhaustion
    /// and client errors are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ExtractError::AiRequest(e) => e.is_timeout() || e.is_connect(),
            ExtractError::AiApi { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Whether the error was caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::UnknownCategory(_) | ExtractError::MissingCategory
        )
    }
}
