use crate::parser::FeedParser;
use crate::types::{FeedEntry, HeadlineError, Result, SourceConfig};
use reqwest::{Client, StatusCode};
use std::time::Instant;
use tracing::debug;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch and parse a feed in one go. Any status other than 200 is an
    /// error; there is exactly one attempt.
    pub async fn fetch_feed(&self, url: &str) -> Result<Vec<FeedEntry>> {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(HeadlineError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(
            "Fetched feed: {} ({} bytes in {}ms)",
            url,
            body.len(),
            start_time.elapsed().as_millis()
        );

        let parsed = FeedParser::parse_feed(&body)?;
        debug!(
            "Feed {} ({}) has {} entries",
            url,
            parsed.title.as_deref().unwrap_or("untitled"),
            parsed.entries.len()
        );
        Ok(parsed.entries)
    }
}

/// Convenience for one-off fetches: builds a client from `config`, fetches,
/// and drops the client before returning.
pub async fn fetch_feed(url: &str, config: &SourceConfig) -> Result<Vec<FeedEntry>> {
    Fetcher::new(config)?.fetch_feed(url).await
}
