//! # Appraisal Report Field Extraction
//!
//! This crate pulls structured field data out of real-estate appraisal report
//! PDFs. Each request sends the report and a section-specific prompt to a
//! multimodal model, then normalizes the model's JSON reply into one combined
//! field map plus the raw replies for audit.

pub mod catalog;
pub mod errors;
pub mod extractor;
pub mod normalize;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::ExtractError;
pub use extractor::Extractor;
pub use types::{CombinedResult, Document, ExtractionRequest, ModelResponse};
