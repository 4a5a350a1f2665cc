//! # appraisal-cli
//!
//! Runs the appraisal extraction pipeline against a local PDF and prints the
//! combined result as JSON. Also exposes the field catalog for inspection.

use anyhow::{Context, Result};
use appraisal::{
    catalog::{self, GridKind},
    providers::{
        ai::retry::RetryPolicy,
        factory::{create_gemini_provider, GeminiSettings, DEFAULT_GEMINI_MODEL},
    },
    CombinedResult, Document, Extractor,
};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Where to write logs. Output on stdout stays clean JSON.
    #[arg(long, global = true, default_value = "appraisal-cli.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the categories extracted for a form type
    Categories(CategoriesArgs),
    /// Show the field labels requested for a category
    Fields(FieldsArgs),
    /// Extract fields from a local appraisal report PDF
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
struct CategoriesArgs {
    /// Form type, e.g. 1004, 1073 or 1007. Unknown values get the default list.
    #[arg(long)]
    form_type: Option<String>,
}

#[derive(Args, Debug)]
struct FieldsArgs {
    /// Category name, case-insensitive
    category: String,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Path to the report PDF
    #[arg(long)]
    file: PathBuf,
    /// Form type of the report
    #[arg(long)]
    form_type: String,
    /// Category to extract
    #[arg(long, conflicts_with = "all")]
    category: Option<String>,
    /// Free-text instruction; takes precedence over --category
    #[arg(long, conflicts_with = "all")]
    comment: Option<String>,
    /// Extract every category of the form type, one model call each
    #[arg(long)]
    all: bool,
    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    model: String,
    /// Full generateContent URL, overriding the one derived from --model
    #[arg(long, env = "GEMINI_API_URL")]
    api_url: Option<String>,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Per-call timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Retries for transient model failures
    #[arg(long, default_value_t = 0)]
    max_retries: u32,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    let subscriber = fmt::Subscriber::builder()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = match cli.command {
        Commands::Categories(args) => handle_categories(&args),
        Commands::Fields(args) => handle_fields(&args)?,
        Commands::Extract(args) => serde_json::to_value(handle_extract(args).await?)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

// --- Command Handlers ---

fn handle_categories(args: &CategoriesArgs) -> Value {
    let categories = catalog::resolve_categories(args.form_type.as_deref().unwrap_or(""));
    json!({ "form_type": args.form_type, "categories": categories })
}

fn handle_fields(args: &FieldsArgs) -> Result<Value> {
    let category = catalog::normalize_category(&args.category);
    let fields = catalog::fields_for(&category)?;
    Ok(json!({
        "grid": GridKind::from_category(&category).is_some(),
        "category": category,
        "fields": fields,
    }))
}

async fn handle_extract(args: ExtractArgs) -> Result<CombinedResult> {
    let settings = GeminiSettings {
        api_key: args
            .api_key
            .context("GEMINI_API_KEY is required for extraction (set it or pass --api-key)")?,
        model: Some(args.model),
        api_url: args.api_url,
        timeout: args.timeout_secs.map(Duration::from_secs),
        retry: RetryPolicy {
            max_retries: args.max_retries,
            ..RetryPolicy::default()
        },
    };
    let extractor = Extractor::new(create_gemini_provider(&settings)?);

    info!(
        "Extracting from '{}' (form type '{}')",
        args.file.display(),
        args.form_type
    );
    if args.all {
        let data = tokio::fs::read(&args.file)
            .await
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        return Ok(extractor
            .extract_all(&Document::pdf(data), &args.form_type)
            .await?);
    }

    Ok(extractor
        .extract_file(
            &args.file,
            &args.form_type,
            args.category.as_deref(),
            args.comment.as_deref(),
        )
        .await?)
}
