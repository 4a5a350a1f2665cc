//! # Extraction Handlers
//!
//! `POST /extract-by-category` and `POST /extract`. Both take a multipart
//! upload, validate it before any model call, stage the PDF in a scratch file
//! and run the extraction pipeline on it.

use super::{AppError, AppState};
use appraisal::CombinedResult;
use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use std::time::Instant;
use tracing::{info, warn};

// --- Upload Parsing ---

/// The multipart fields of an extraction request.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file_name: Option<String>,
    pub data: Option<Vec<u8>>,
    pub form_type: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
}

/// A validated upload, ready for extraction.
#[derive(Debug)]
pub struct ValidatedUpload {
    pub file_name: String,
    pub data: Vec<u8>,
    pub form_type: String,
    pub category: Option<String>,
    pub comment: Option<String>,
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::InvalidUpload(format!("Invalid multipart request: {e}"))
}

fn optional_text(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

async fn read_upload_form(
    mut multipart: Multipart,
    accept_comment: bool,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                form.file_name = field.file_name().map(str::to_string);
                form.data = Some(field.bytes().await.map_err(multipart_error)?.to_vec());
            }
            "form_type" => {
                form.form_type = optional_text(field.text().await.map_err(multipart_error)?);
            }
            "category" => {
                form.category = optional_text(field.text().await.map_err(multipart_error)?);
            }
            "comment" if accept_comment => {
                form.comment = optional_text(field.text().await.map_err(multipart_error)?);
            }
            _ => warn!("Ignoring unknown multipart field: {}", name),
        }
    }

    Ok(form)
}

impl UploadForm {
    /// Checks the upload before anything is sent to the model.
    pub fn validate(self) -> Result<ValidatedUpload, AppError> {
        let (file_name, data) = match (self.file_name, self.data) {
            (Some(name), Some(data)) if !name.trim().is_empty() => (name, data),
            _ => return Err(AppError::InvalidUpload("No file uploaded".to_string())),
        };
        if !file_name.to_lowercase().ends_with(".pdf") {
            return Err(AppError::InvalidUpload(
                "Only PDF files are supported".to_string(),
            ));
        }
        let form_type = self.form_type.ok_or_else(|| {
            AppError::InvalidUpload("Missing required field: form_type".to_string())
        })?;

        Ok(ValidatedUpload {
            file_name,
            data,
            form_type,
            category: self.category,
            comment: self.comment,
        })
    }
}

// --- Pipeline ---

async fn run_extraction(
    app_state: &AppState,
    upload: ValidatedUpload,
) -> Result<CombinedResult, AppError> {
    // The scratch file is removed when `scratch` is dropped, on every exit path.
    let scratch = tempfile::Builder::new()
        .prefix("appraisal-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create scratch file: {e}")))?;
    tokio::fs::write(scratch.path(), &upload.data)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to stage upload: {e}")))?;

    let started = Instant::now();
    let result = app_state
        .extractor
        .extract_file(
            scratch.path(),
            &upload.form_type,
            upload.category.as_deref(),
            upload.comment.as_deref(),
        )
        .await?;

    info!(
        file = %upload.file_name,
        fields = result.fields.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Extraction finished."
    );
    Ok(result)
}

// --- Handlers ---

/// Extracts one category from an uploaded report.
pub async fn extract_by_category_handler(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CombinedResult>, AppError> {
    let upload = read_upload_form(multipart, false).await?.validate()?;
    info!(
        "Extract-by-category request: file='{}', form_type='{}', category={:?}",
        upload.file_name, upload.form_type, upload.category
    );
    Ok(Json(run_extraction(&app_state, upload).await?))
}

/// Extracts one category, or answers a free-text `comment` when one is given.
pub async fn extract_handler(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CombinedResult>, AppError> {
    let upload = read_upload_form(multipart, true).await?.validate()?;
    info!(
        "Extract request: file='{}', form_type='{}', category={:?}, custom prompt: {}",
        upload.file_name,
        upload.form_type,
        upload.category,
        upload.comment.is_some()
    );
    Ok(Json(run_extraction(&app_state, upload).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(file_name: Option<&str>) -> UploadForm {
        UploadForm {
            file_name: file_name.map(String::from),
            data: Some(b"%PDF".to_vec()),
            form_type: Some("1004".to_string()),
            ..Default::default()
        }
    }

    fn rejection(form: UploadForm) -> String {
        match form.validate() {
            Err(AppError::InvalidUpload(msg)) => msg,
            other => panic!("expected InvalidUpload, got {other:?}"),
        }
    }

    #[test]
    fn accepts_upper_case_pdf_extension() {
        assert!(form(Some("REPORT.PDF")).validate().is_ok());
    }

    #[test]
    fn rejects_missing_or_unnamed_files() {
        assert_eq!(rejection(form(None)), "No file uploaded");
        assert_eq!(rejection(form(Some(""))), "No file uploaded");
        let mut no_data = form(Some("report.pdf"));
        no_data.data = None;
        assert_eq!(rejection(no_data), "No file uploaded");
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(rejection(form(Some("report.docx"))), "Only PDF files are supported");
        assert_eq!(rejection(form(Some("pdf"))), "Only PDF files are supported");
    }

    #[test]
    fn requires_form_type() {
        let mut missing = form(Some("report.pdf"));
        missing.form_type = None;
        assert_eq!(rejection(missing), "Missing required field: form_type");
    }
}
