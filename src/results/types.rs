//! Deserialized shapes for the news index's search response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a publishing source.
///
/// The upstream JSON is loose here: sometimes a string slug, sometimes a
/// bare number, often `null` or absent. Model the present cases as a tagged
/// union and let `Option<SourceId>` cover absence, instead of punting to an
/// untyped value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceId {
    Text(String),
    Number(i64),
}

/// A publishing source attached to an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<SourceId>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub name: String,
}

/// A single news article as returned by the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Source,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub content: String,
}

impl Article {
    /// Human-readable publication date, e.g. "January 2, 2026".
    pub fn format_published_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// One page of search results from the index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Upstream emits `null` where we want an empty string.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
