//! Fetch settings and their defaults.

use std::path::PathBuf;
use std::time::Duration;

/// OpenAlex API base URL
pub const OPENALEX_API_BASE: &str = "https://api.openalex.org";

/// Contact address sent as `mailto` (OpenAlex polite pool)
pub const CONTACT_EMAIL: &str = "contact@apb-ldn.org";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Works returned per list (first page only)
pub const WORKS_PER_PAGE: u32 = 5;

/// Where the summary lands, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/scholar.json";

/// Settings for one metrics run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Contact address for the `mailto` parameter
    pub mailto: String,
    pub timeout: Duration,
    pub per_page: u32,
    /// Optional proxy URL (e.g., "http://127.0.0.1:7890")
    pub proxy: Option<String>,
    pub output: PathBuf,
}

impl FetchConfig {
    /// Config pointing at a different API host, e.g. a mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: OPENALEX_API_BASE.to_string(),
            mailto: CONTACT_EMAIL.to_string(),
            timeout: REQUEST_TIMEOUT,
            per_page: WORKS_PER_PAGE,
            proxy: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
