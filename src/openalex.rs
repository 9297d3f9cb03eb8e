//! OpenAlex API Client
//!
//! Fetches an author record and the author's works lists from OpenAlex.
//!
//! API notes (per OpenAlex docs):
//! - `mailto` puts requests in the polite pool; no key is needed
//! - Works are filtered with `authorships.author.id:<id>`
//! - Only the first page is ever requested

use crate::config::FetchConfig;
use crate::error::{MetricsError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Sort order for the works endpoint. Always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent first
    PublicationDate,
    /// Most cited first
    CitedByCount,
}

impl SortKey {
    /// Field name as OpenAlex expects it in `sort=`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PublicationDate => "publication_date",
            SortKey::CitedByCount => "cited_by_count",
        }
    }
}

/// Works list response. Only `results` is read; `meta` and the rest are ignored.
#[derive(Debug, Deserialize)]
struct WorksPage {
    #[serde(default)]
    results: Vec<Value>,
}

/// Thin OpenAlex client bound to one base URL and contact address.
pub struct OpenAlexClient {
    client: Client,
    base_url: String,
    mailto: String,
    per_page: u32,
}

impl OpenAlexClient {
    /// Create a new OpenAlexClient
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, contact, timeout, page size and optional proxy
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "openalex-metrics/{} (mailto:{})",
                env!("CARGO_PKG_VERSION"),
                config.mailto
            ));

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str())
                .map_err(|e| MetricsError::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| MetricsError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            mailto: config.mailto.clone(),
            per_page: config.per_page,
        })
    }

    /// Fetch the raw author record (`GET /authors/{id}`).
    pub async fn fetch_author(&self, author_id: &str) -> Result<Value> {
        let url = format!("{}/authors/{}", self.base_url, author_id);
        let author = self
            .get_json(&url, &[("mailto", self.mailto.as_str())])
            .await?;

        info!(author_id = author_id, "Fetched OpenAlex author");
        Ok(author)
    }

    /// Fetch the first page of an author's works, sorted descending by `sort`.
    ///
    /// Returns the raw `results` array, empty when the response has none.
    pub async fn fetch_works(&self, author_id: &str, sort: SortKey) -> Result<Vec<Value>> {
        let url = format!("{}/works", self.base_url);
        let filter = format!("authorships.author.id:{}", author_id);
        let sort_param = format!("{}:desc", sort.as_str());
        let per_page = self.per_page.to_string();

        let body = self
            .get_json(
                &url,
                &[
                    ("filter", filter.as_str()),
                    ("sort", sort_param.as_str()),
                    ("per_page", per_page.as_str()),
                    ("mailto", self.mailto.as_str()),
                ],
            )
            .await?;

        let mut results = serde_json::from_value::<WorksPage>(body)?.results;
        results.truncate(self.per_page as usize);

        info!(
            author_id = author_id,
            sort = sort.as_str(),
            count = results.len(),
            "Fetched OpenAlex works"
        );
        Ok(results)
    }

    /// GET a URL and parse the body as JSON. Non-2xx statuses are errors.
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        debug!(url = %url, "Fetching OpenAlex resource");

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(MetricsError::Api {
                code: status.as_u16(),
                message: format!("OpenAlex API error: {}", status),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
