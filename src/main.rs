//! openalex-metrics - OpenAlex author metrics for static site builds
//!
//! Queries OpenAlex for one author and writes citation totals plus the five
//! latest and five most cited works to `src/data/scholar.json`.
//!
//! ## Usage
//!
//! ```bash
//! openalex-metrics A5023888391
//! ```

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use openalex_metrics::config::{
    FetchConfig, CONTACT_EMAIL, DEFAULT_OUTPUT_PATH, OPENALEX_API_BASE, REQUEST_TIMEOUT,
    WORKS_PER_PAGE,
};
use openalex_metrics::{metrics, openalex::OpenAlexClient, output};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

// ============================================================================
// CLI Definition
// ============================================================================

/// Fetch OpenAlex metrics for a single author
#[derive(Parser)]
#[command(name = "openalex-metrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// OpenAlex author ID (e.g., A5023888391)
    author_id: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// OpenAlex API base URL
    #[arg(long, default_value = OPENALEX_API_BASE)]
    base_url: Url,

    /// Contact address sent as `mailto`
    #[arg(long, default_value = CONTACT_EMAIL)]
    mailto: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Proxy URL (e.g., http://127.0.0.1:7890)
    #[arg(long)]
    proxy: Option<String>,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            base_url: self.base_url.as_str().trim_end_matches('/').to_string(),
            mailto: self.mailto.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            per_page: WORKS_PER_PAGE,
            proxy: self.proxy.clone(),
            output: self.output.clone(),
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("Usage: openalex-metrics <author_id>");
            std::process::exit(1);
        }
    };

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let author_id = cli.author_id.trim().to_string();
    let config = cli.fetch_config();
    debug!(author_id = %author_id, base_url = %config.base_url, "Starting metrics update");

    let client = OpenAlexClient::new(&config).context("Failed to set up OpenAlex client")?;
    let summary = metrics::collect_or_default(&client, &author_id).await;

    output::write_metrics(&config.output, &summary)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(())
}
