use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod corpus;
mod error;
mod search;
mod sections;
mod service;
use service::DocsSearchService;

/// MCP server for browsing and keyword-searching MCP documentation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Replace the embedded MCP documentation with a Markdown file
    #[arg(long, env = "DOCS_SEARCH_MCP_DOCS")]
    mcp_docs: Option<PathBuf>,

    /// Replace the embedded Python SDK README with a Markdown file
    #[arg(long, env = "DOCS_SEARCH_SDK_README")]
    sdk_readme: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting docs-search MCP server on stdio...");

    let documents = corpus::load_corpus(args.mcp_docs.as_deref(), args.sdk_readme.as_deref())?;

    // The index is built once here, before any request is accepted.
    let docs_service = DocsSearchService::new(documents).inspect_err(|e| {
        tracing::error!("failed to build section index: {e}");
    })?;

    let service = docs_service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}
