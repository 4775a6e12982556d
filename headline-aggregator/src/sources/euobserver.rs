use crate::filter::KeywordFilter;
use crate::sources::FeedSource;

pub const NAME: &str = "EUobserver";
pub const FEED_URL: &str = "https://euobserver.com/rss.xml";

/// EUobserver only publishes a site-wide feed, so entries have to mention the
/// climate vocabulary to be kept.
pub fn source() -> FeedSource {
    FeedSource::new(NAME, FEED_URL).with_keyword_filter(KeywordFilter::climate())
}
