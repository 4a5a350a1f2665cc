//! # Prompt Template Modules
//!
//! Prompt templates sent to the model together with the uploaded report.

pub mod extraction;
