//! Writing the metrics summary to disk.

use crate::error::Result;
use crate::metrics::AuthorMetrics;
use std::path::Path;
use tracing::info;

/// Serialize `metrics` as 2-space indented JSON and write it to `path`,
/// creating parent directories as needed. An existing file is replaced.
pub fn write_metrics(path: &Path, metrics: &AuthorMetrics) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(metrics)?;
    std::fs::write(path, content)?;
    info!("Wrote author metrics to {:?}", path);
    Ok(())
}
