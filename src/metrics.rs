//! Author metrics summary.
//!
//! Shapes the raw OpenAlex author and works records into the small summary
//! the site build reads. A failed fetch never leaves the caller without a
//! record: [`collect_or_default`] falls back to the zeroed summary.

use crate::error::Result;
use crate::openalex::{OpenAlexClient, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

/// One publication, reduced to the four fields the site shows.
///
/// Values are kept exactly as OpenAlex sent them (normally strings and an
/// integer count). Absent upstream fields stay `None` and serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSummary {
    pub id: Option<Value>,
    pub display_name: Option<Value>,
    pub publication_date: Option<Value>,
    pub cited_by_count: Option<Value>,
}

/// Output root written to `scholar.json`.
///
/// `Default` is the zeroed record used when OpenAlex cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorMetrics {
    /// The author's `cited_by_count` as sent, or 0 when the field is absent
    pub total_citations: Value,
    pub last_works: Vec<WorkSummary>,
    pub top_cited_works: Vec<WorkSummary>,
}

impl Default for AuthorMetrics {
    fn default() -> Self {
        Self {
            total_citations: Value::from(0),
            last_works: Vec::new(),
            top_cited_works: Vec::new(),
        }
    }
}

/// Pick `id`, `display_name`, `publication_date` and `cited_by_count` from a
/// raw work record, copying each value unchanged.
pub fn simplify(work: &Value) -> WorkSummary {
    let field = |key: &str| work.get(key).filter(|v| !v.is_null()).cloned();

    WorkSummary {
        id: field("id"),
        display_name: field("display_name"),
        publication_date: field("publication_date"),
        cited_by_count: field("cited_by_count"),
    }
}

/// Fetch the author record and both works lists, in order.
///
/// Any failure aborts the whole collection; nothing fetched earlier is kept.
pub async fn collect(client: &OpenAlexClient, author_id: &str) -> Result<AuthorMetrics> {
    let author = client.fetch_author(author_id).await?;
    let last_works = client
        .fetch_works(author_id, SortKey::PublicationDate)
        .await?;
    let top_cited_works = client.fetch_works(author_id, SortKey::CitedByCount).await?;

    Ok(AuthorMetrics {
        total_citations: author
            .get("cited_by_count")
            .cloned()
            .unwrap_or_else(|| Value::from(0)),
        last_works: last_works.iter().map(simplify).collect(),
        top_cited_works: top_cited_works.iter().map(simplify).collect(),
    })
}

/// Like [`collect`], but logs the failure and returns the zeroed record.
pub async fn collect_or_default(client: &OpenAlexClient, author_id: &str) -> AuthorMetrics {
    match collect(client, author_id).await {
        Ok(metrics) => {
            info!(
                author_id = author_id,
                total_citations = %metrics.total_citations,
                last_works = metrics.last_works.len(),
                top_cited_works = metrics.top_cited_works.len(),
                "Collected author metrics"
            );
            metrics
        }
        Err(e) => {
            error!(
                author_id = author_id,
                kind = e.kind(),
                error = %e.detailed(),
                "OpenAlex request failed"
            );
            AuthorMetrics::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simplify_drops_extra_fields() {
        let work = json!({
            "id": "https://openalex.org/W1",
            "display_name": "Landslide susceptibility mapping",
            "publication_date": "2024-03-01",
            "cited_by_count": 17,
            "doi": "https://doi.org/10.1/abc",
            "authorships": [{"author": {"display_name": "A. Author"}}]
        });

        let summary = simplify(&work);
        assert_eq!(summary.id, Some(json!("https://openalex.org/W1")));
        assert_eq!(summary.cited_by_count, Some(json!(17)));

        let serialized = serde_json::to_value(&summary).unwrap();
        let keys: Vec<&String> = serialized.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert!(serialized.get("doi").is_none());
    }

    #[test]
    fn test_simplify_keeps_missing_as_null() {
        let summary = simplify(&json!({"id": "W2"}));
        assert_eq!(summary.display_name, None);

        let serialized = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            serialized,
            json!({
                "id": "W2",
                "display_name": null,
                "publication_date": null,
                "cited_by_count": null
            })
        );
    }

    #[test]
    fn test_simplify_copies_values_unchanged() {
        let summary = simplify(&json!({
            "id": 123,
            "display_name": "X",
            "publication_date": "2024",
            "cited_by_count": 3.0
        }));

        let serialized = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            serialized,
            r#"{"id":123,"display_name":"X","publication_date":"2024","cited_by_count":3.0}"#
        );

        let huge = simplify(&json!({"cited_by_count": u64::MAX}));
        assert_eq!(huge.cited_by_count, Some(json!(u64::MAX)));
    }

    #[test]
    fn test_simplify_non_object() {
        assert_eq!(simplify(&json!("W3")), WorkSummary::default());
    }

    #[test]
    fn test_zeroed_record() {
        let serialized = serde_json::to_string(&AuthorMetrics::default()).unwrap();
        assert_eq!(
            serialized,
            r#"{"total_citations":0,"last_works":[],"top_cited_works":[]}"#
        );
    }
}
