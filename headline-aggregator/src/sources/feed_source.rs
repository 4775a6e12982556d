use crate::fetcher;
use crate::filter::KeywordFilter;
use crate::traits::HeadlineSource;
use crate::types::{FeedEntry, Headline, HeadlineError, Result, SourceConfig};
use crate::utils::{text, time, url};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Generic RSS/Atom headline source.
///
/// Every registered outlet is one of these with its own name, feed URL and
/// policy switches; the extraction rules themselves are shared.
#[derive(Debug, Clone)]
pub struct FeedSource {
    name: String,
    url: String,
    strip_tracking: bool,
    filter: Option<KeywordFilter>,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            strip_tracking: false,
            filter: None,
        }
    }

    /// Cut `?utm_...` tracking queries off article links.
    pub fn with_tracking_stripped(mut self) -> Self {
        self.strip_tracking = true;
        self
    }

    /// Keep only entries whose title or excerpt mentions one of the keywords.
    pub fn with_keyword_filter(mut self, filter: KeywordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn keyword_filter(&self) -> Option<&KeywordFilter> {
        self.filter.as_ref()
    }

    /// Turn parsed entries into at most `limit` headlines.
    ///
    /// Untitled and filtered-out entries are skipped without counting toward
    /// `limit`. `collected_at` stands in for entries that carry no date.
    pub fn extract(
        &self,
        entries: &[FeedEntry],
        limit: usize,
        collected_at: DateTime<Utc>,
    ) -> Vec<Headline> {
        let mut headlines = Vec::with_capacity(limit.min(entries.len()));

        for entry in entries {
            if headlines.len() >= limit {
                break;
            }
            if let Some(headline) = self.extract_entry(entry, collected_at) {
                headlines.push(headline);
            }
        }

        headlines
    }

    fn extract_entry(&self, entry: &FeedEntry, collected_at: DateTime<Utc>) -> Option<Headline> {
        let title = entry.title.as_deref().unwrap_or_default().trim();
        if title.is_empty() {
            return None;
        }

        let excerpt = [entry.content.as_deref(), entry.description.as_deref()]
            .into_iter()
            .flatten()
            .map(text::strip_html)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_default();

        if let Some(filter) = &self.filter {
            if !filter.matches(title, &excerpt) {
                debug!("{}: dropping off-topic entry: {}", self.name, title);
                return None;
            }
        }

        let link = entry.link.as_deref().unwrap_or_default().trim();
        let link = if self.strip_tracking {
            url::strip_tracking(link)
        } else {
            link
        };

        let published = entry.published.or(entry.updated).unwrap_or(collected_at);

        Some(Headline {
            source: self.name.clone(),
            title: title.to_string(),
            url: link.to_string(),
            published_at: time::format_timestamp(&published),
            excerpt,
            is_headline: true,
        })
    }
}

#[async_trait]
impl HeadlineSource for FeedSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn collect(&self, limit: usize, config: &SourceConfig) -> Result<Vec<Headline>> {
        info!("Pulling feed: {} ({})", self.name, self.url);

        let entries = fetcher::fetch_feed(&self.url, config).await?;
        if entries.is_empty() {
            return Err(HeadlineError::EmptyFeed {
                url: self.url.clone(),
            });
        }

        let headlines = self.extract(&entries, limit, Utc::now());

        info!(
            "{}: kept {} of {} entries",
            self.name,
            headlines.len(),
            entries.len()
        );
        Ok(headlines)
    }
}
