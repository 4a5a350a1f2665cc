use appraisal::{
    errors::ExtractError,
    providers::ai::AiProvider,
    types::{Document, ModelResponse},
};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// A programmed outcome for a mocked model call.
#[derive(Clone, Debug)]
pub enum MockReply {
    Text(String),
    Blocked(String),
    QuotaExhausted,
    ServerError(u16),
}

/// A recorded call to [`MockAiProvider`].
#[derive(Clone, Debug)]
pub struct MockCall {
    pub prompt: String,
    pub mime_type: String,
    pub document_len: usize,
}

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    replies: Arc<Mutex<Vec<(String, MockReply)>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs a reply. The key should be a unique substring of the prompt;
    /// the first matching key in insertion order wins.
    pub fn add_reply(&self, key: &str, reply: MockReply) {
        self.replies.lock().unwrap().push((key.to_string(), reply));
    }

    /// Shorthand for a plain text reply.
    pub fn add_response(&self, key: &str, response: &str) {
        self.add_reply(key, MockReply::Text(response.to_string()));
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate_with_document(
        &self,
        document: &Document,
        prompt: &str,
    ) -> Result<ModelResponse, ExtractError> {
        self.calls.lock().unwrap().push(MockCall {
            prompt: prompt.to_string(),
            mime_type: document.mime_type.clone(),
            document_len: document.data.len(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| prompt.contains(key.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(MockReply::Text(text)) => Ok(ModelResponse::Text(text)),
            Some(MockReply::Blocked(reason)) => Ok(ModelResponse::Blocked { reason }),
            Some(MockReply::QuotaExhausted) => Err(ExtractError::QuotaExhausted(
                "429 RESOURCE_EXHAUSTED (mock)".to_string(),
            )),
            Some(MockReply::ServerError(status)) => Err(ExtractError::AiApi {
                status,
                message: "mock server error".to_string(),
            }),
            None => Err(ExtractError::AiApi {
                status: 500,
                message: format!("MockAiProvider: No reply programmed for prompt. Got: '{prompt}'"),
            }),
        }
    }
}

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use printpdf::{
        BuiltinFont, Layer, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem,
        TextMatrix, TextRenderingMode,
    };

    /// Generates a single-page PDF with one line of text per entry, compatible with printpdf v0.8.2.
    pub fn generate_report_pdf(lines: &[&str]) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new("Appraisal Report");
        let mut page = PdfPage::new(Mm(215.9), Mm(279.4), vec![]);
        let layer_id = doc.add_layer(&Layer::new("Form"));

        let font_bytes = BuiltinFont::Helvetica.get_subset_font().bytes;
        let font = ParsedFont::from_bytes(&font_bytes, 0, &mut Vec::new())
            .ok_or_else(|| anyhow::anyhow!("Failed to parse built-in font"))?;
        let font_id = doc.add_font(&font);

        let mut ops = vec![Op::BeginLayer {
            layer_id: layer_id.clone(),
        }];
        for (i, line) in lines.iter().enumerate() {
            let y = 265.0 - 7.0 * i as f32;
            ops.extend([
                Op::StartTextSection,
                Op::SetFontSize {
                    size: Pt(11.0),
                    font: font_id.clone(),
                },
                Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Mm(15.0).into(), Mm(y).into()),
                },
                Op::SetTextRenderingMode {
                    mode: TextRenderingMode::Fill,
                },
                Op::WriteText {
                    items: vec![TextItem::Text(line.to_string())],
                    font: font_id.clone(),
                },
                Op::EndTextSection,
            ]);
        }
        ops.push(Op::EndLayer { layer_id });

        page.ops = ops;
        doc.pages.push(page);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            eprintln!("PDF generation warnings: {warnings:?}");
        }
        Ok(bytes)
    }

    /// A minimal uniform residential appraisal report.
    pub fn sample_appraisal_pdf() -> Result<Vec<u8>> {
        generate_report_pdf(&[
            "Uniform Residential Appraisal Report",
            "Property Address 123 Main St   City Springfield   State IL",
            "CERTIFICATION  Name Jane Appraiser  State Certification # 556.001234",
        ])
    }
}
