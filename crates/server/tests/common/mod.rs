#![allow(unused)]
//! # Common Test Utilities
//!
//! Spawns the extraction server on a random port with an `httpmock` server
//! standing in for the Gemini `generateContent` endpoint.

use anyhow::Result;
use appraisal_server::{config, router, state::build_app_state};
use httpmock::MockServer;
use reqwest::{multipart, Client};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Path the mocked Gemini endpoint is served under.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

/// A running server instance wired to a mock Gemini backend.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application with a temporary `config.yml`.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber_init();

        let mock_server = MockServer::start();
        let config_dir = tempfile::tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
gemini_api_key: "test-key"
gemini_api_url: "{}"
max_upload_mb: 5
"#,
            mock_server.url(GEMINI_PATH)
        );
        fs::write(&config_path, config_content)?;

        let config = config::get_config(config_path.to_str())?;
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, router::create_router(app_state))
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed to run");
        });

        sleep(Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Posts a multipart upload to one of the extraction endpoints.
    pub async fn post_upload(
        &self,
        path: &str,
        file: Option<(&str, Vec<u8>)>,
        text_fields: &[(&str, &str)],
    ) -> Result<reqwest::Response> {
        let mut form = multipart::Form::new();
        if let Some((file_name, bytes)) = file {
            let part = multipart::Part::bytes(bytes)
                .file_name(file_name.to_string())
                .mime_str("application/pdf")?;
            form = form.part("file", part);
        }
        for (name, value) in text_fields {
            form = form.text(name.to_string(), value.to_string());
        }
        Ok(self.client.post(self.url(path)).multipart(form).send().await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn tracing_subscriber_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .finish(),
    )?;
    Ok(())
}

/// A Gemini `generateContent` success body whose single candidate carries `text`.
pub fn gemini_text_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// The report PDF used across the extraction tests.
pub fn sample_pdf() -> Vec<u8> {
    appraisal_test_utils::helpers::sample_appraisal_pdf().expect("Failed to generate test PDF")
}
