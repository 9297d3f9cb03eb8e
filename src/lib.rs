//! # openalex-metrics
//!
//! Fetch an author's citation metrics from OpenAlex and write a JSON summary
//! for a static site build.
//!
//! ## Modules
//!
//! - [`openalex`] - OpenAlex API client (author and works endpoints)
//! - [`metrics`] - Summary data model and collection
//! - [`output`] - JSON file output
//! - [`config`] - Fetch settings and defaults
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use openalex_metrics::{config::FetchConfig, metrics, openalex::OpenAlexClient, output};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FetchConfig::default();
//!     let client = OpenAlexClient::new(&config)?;
//!     let summary = metrics::collect_or_default(&client, "A5023888391").await;
//!     output::write_metrics(&config.output, &summary)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod openalex;
pub mod output;

pub use error::{MetricsError, Result};
pub use metrics::{AuthorMetrics, WorkSummary};
