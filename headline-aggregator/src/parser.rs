use crate::types::{FeedEntry, HeadlineError, Result};
use feed_rs::model::Link;
use feed_rs::parser;
use tracing::debug;

#[derive(Debug)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

/// Thin wrapper over `feed-rs`; RSS 0.9x/1.0/2.0, Atom and JSON Feed are
/// detected from the document itself.
pub struct FeedParser;

impl FeedParser {
    pub fn parse_feed(content: &[u8]) -> Result<ParsedFeed> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content)
            .map_err(|e| HeadlineError::Parse(format!("Failed to parse feed: {}", e)))?;

        let title = feed.title.map(|t| t.content);
        let entries: Vec<FeedEntry> = feed.entries.into_iter().map(Self::convert_entry).collect();

        debug!("Parsed feed with {} entries", entries.len());

        Ok(ParsedFeed { title, entries })
    }

    fn convert_entry(entry: feed_rs::model::Entry) -> FeedEntry {
        let title = entry.title.map(|t| t.content);

        let link = Self::article_link(entry.links);

        let description = entry.summary.map(|s| s.content);
        let content = entry.content.and_then(|c| c.body);

        FeedEntry {
            title,
            link,
            content,
            description,
            published: entry.published,
            updated: entry.updated,
        }
    }

    /// Atom entries can carry `replies`, `enclosure` or `self` links next to
    /// the article; take the first `alternate` (or rel-less) link and only
    /// fall back to the first link when there is none.
    fn article_link(links: Vec<Link>) -> Option<String> {
        let is_article = |link: &Link| match link.rel.as_deref() {
            None => true,
            Some(rel) => rel.eq_ignore_ascii_case("alternate"),
        };

        let index = links
            .iter()
            .position(|link| !link.href.trim().is_empty() && is_article(link))
            .unwrap_or(0);

        links.into_iter().nth(index).map(|link| link.href)
    }
}
