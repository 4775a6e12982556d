use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single collected headline, serialized with the field names downstream
/// consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "PublishedAt")]
    pub published_at: String,
    #[serde(rename = "Excerpt")]
    pub excerpt: String,
    #[serde(rename = "IsHeadline")]
    pub is_headline: bool,
}

/// Per-run settings shared read-only by every source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            user_agent: format!("carbon-headlines/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// An entry as it comes out of the feed parser, before any source policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum HeadlineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Feed at {url} contained no entries")]
    EmptyFeed { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeadlineError>;
